// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;
use std::io::Read;

use crate::buffer::Reader;
use crate::codec::Codec;
use crate::config::{Config, Endian};
use crate::error::Error;
use crate::field::FieldDescriptor;

/// Decoding session over an [`std::io::Read`] source.
///
/// Mirrors [`Encoder`](crate::encoder::Encoder): same session state, same
/// field-inclusion rule, reading instead of writing. A truncated source is
/// not an error; the unread remainder decodes as zero bytes and
/// [`Decoder::bytes_consumed`] tells how much input was actually used.
pub struct Decoder<R> {
    pub reader: Reader<R>,
    config: Config,
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder with the default session configuration.
    pub fn new(source: R) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: R, config: Config) -> Self {
        Decoder {
            reader: Reader::new(source, config.endian),
            config,
        }
    }

    /// Creates a decoder in only-tagged mode with an explicit tag name.
    pub fn with_tags(source: R, tag: impl Into<Cow<'static, str>>) -> Self {
        Self::new(source).tag(tag).only_tagged(true)
    }

    /// Sets the byte order for this session.
    pub fn endian(mut self, endian: Endian) -> Self {
        self.config.endian = endian;
        self.reader.set_endian(endian);
        self
    }

    /// Sets the tag name consulted for field inclusion.
    pub fn tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.config.tag = tag.into();
        self
    }

    /// Restricts decoding to fields carrying a recognized tag.
    pub fn only_tagged(mut self, only_tagged: bool) -> Self {
        self.config.only_tagged = only_tagged;
        self
    }

    /// Decodes one value from the source.
    pub fn decode<T: Codec>(&mut self) -> Result<T, Error> {
        T::decode(self)
    }

    /// Decodes into an optional target slot.
    ///
    /// A `None` target is accepted and treated as a no-op: zero bytes
    /// consumed, success. This is a dedicated top-level check, not the
    /// nilable-field rule.
    pub fn decode_into<T: Codec>(&mut self, target: Option<&mut T>) -> Result<(), Error> {
        match target {
            None => Ok(()),
            Some(slot) => {
                *slot = T::decode(self)?;
                Ok(())
            }
        }
    }

    /// Whether a struct field takes part in this session.
    #[inline]
    pub fn include_field(&self, field: &FieldDescriptor) -> bool {
        self.config.include_field(field)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bytes actually obtained from the source so far.
    pub fn bytes_consumed(&self) -> usize {
        self.reader.bytes_consumed()
    }

    /// Consumes the decoder, returning the source.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Decodes a value from a byte slice using session defaults, returning the
/// value and the number of bytes consumed.
pub fn from_bytes<T: Codec>(data: &[u8]) -> Result<(T, usize), Error> {
    let mut decoder = Decoder::new(data);
    let value = decoder.decode()?;
    Ok((value, decoder.bytes_consumed()))
}

/// Decodes a value from a byte slice in only-tagged mode with an explicit
/// tag name.
pub fn from_bytes_tagged<T: Codec>(
    data: &[u8],
    tag: impl Into<Cow<'static, str>>,
) -> Result<(T, usize), Error> {
    let mut decoder = Decoder::with_tags(data, tag);
    let value = decoder.decode()?;
    Ok((value, decoder.bytes_consumed()))
}
