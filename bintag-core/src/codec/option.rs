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

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::Kind;

/// The nilable wrapper.
///
/// `None` contributes zero bytes to the stream; it is silently skipped, not
/// marked. Decode always produces fresh storage and reads into it,
/// regardless of whether the encoder wrote anything. There is no presence
/// marker on the wire, so an `Option` that was `None` inside a composite
/// value does not round-trip: the decoder will consume the following
/// fields' bytes as the missing value. A `None` is safe only as the single
/// top-level value of a session, where the zero-filled end of input yields
/// `Some(default)`.
impl<T: Codec> Codec for Option<T> {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::Optional
    }

    #[inline(always)]
    fn default_value() -> Self {
        None
    }

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        match self {
            None => Ok(()),
            Some(value) => value.encode(encoder),
        }
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        Ok(Some(T::decode(decoder)?))
    }
}
