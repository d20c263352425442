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
use std::io::Write;

use crate::buffer::Writer;
use crate::codec::Codec;
use crate::config::{Config, Endian};
use crate::error::Error;
use crate::field::FieldDescriptor;

/// Encoding session over an [`std::io::Write`] sink.
///
/// A session owns the sink, the byte order, the active tag name and the
/// only-tagged flag; nothing is shared across sessions. Several values may
/// be encoded to the same sink sequentially.
///
/// # Examples
///
/// ```rust
/// use bintag_core::encoder::Encoder;
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&3u16)?;
/// encoder.encode(&true)?;
/// assert_eq!(encoder.into_inner(), [0x00, 0x03, 0x01]);
/// # Ok::<(), bintag_core::error::Error>(())
/// ```
pub struct Encoder<W> {
    pub writer: Writer<W>,
    config: Config,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with the default session configuration:
    /// big-endian, tag name [`DEFAULT_TAG`](crate::config::DEFAULT_TAG),
    /// only-tagged mode off.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, Config::default())
    }

    pub fn with_config(sink: W, config: Config) -> Self {
        Encoder {
            writer: Writer::new(sink, config.endian),
            config,
        }
    }

    /// Creates an encoder in only-tagged mode with an explicit tag name.
    pub fn with_tags(sink: W, tag: impl Into<Cow<'static, str>>) -> Self {
        Self::new(sink).tag(tag).only_tagged(true)
    }

    /// Sets the byte order for this session.
    pub fn endian(mut self, endian: Endian) -> Self {
        self.config.endian = endian;
        self.writer.set_endian(endian);
        self
    }

    /// Sets the tag name consulted for field inclusion.
    pub fn tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.config.tag = tag.into();
        self
    }

    /// Restricts encoding to fields carrying a recognized tag.
    pub fn only_tagged(mut self, only_tagged: bool) -> Self {
        self.config.only_tagged = only_tagged;
        self
    }

    /// Encodes one value to the sink.
    pub fn encode<T: Codec>(&mut self, value: &T) -> Result<(), Error> {
        value.encode(self)
    }

    /// Whether a struct field takes part in this session. Used by generated
    /// struct impls; the rule is identical on the decode side.
    #[inline]
    pub fn include_field(&self, field: &FieldDescriptor) -> bool {
        self.config.include_field(field)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes the encoder, returning the sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// Encodes a value to a byte vector using session defaults.
pub fn to_bytes<T: Codec>(value: &T) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::new(Vec::with_capacity(128));
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}

/// Encodes a value to a byte vector in only-tagged mode with an explicit
/// tag name.
pub fn to_bytes_tagged<T: Codec>(
    value: &T,
    tag: impl Into<Cow<'static, str>>,
) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::with_tags(Vec::with_capacity(128), tag);
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}
