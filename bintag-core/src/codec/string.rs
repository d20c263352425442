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

/// Strings are a 4-byte unsigned byte-count prefix (session byte order)
/// followed by the raw UTF-8 bytes, unmodified. The count is bytes, not
/// characters.
impl Codec for String {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::Str
    }

    #[inline(always)]
    fn default_value() -> Self {
        String::new()
    }

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        let len = u32::try_from(self.len())
            .map_err(|_| Error::invalid_data("string exceeds the u32 length prefix"))?;
        encoder.writer.write_u32(len)?;
        encoder.writer.write_bytes(self.as_bytes())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        let len = decoder.reader.read_u32()? as usize;
        let bytes = decoder.reader.read_bytes(len)?;
        String::from_utf8(bytes)
            .map_err(|e| Error::invalid_data(format!("string payload is not valid utf-8: {e}")))
    }
}
