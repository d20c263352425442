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

/// Variable-size sequences carry a 4-byte unsigned element-count prefix
/// (session byte order) followed by each element in order.
impl<T: Codec> Codec for Vec<T> {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::List
    }

    #[inline(always)]
    fn default_value() -> Self {
        Vec::new()
    }

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        let len = u32::try_from(self.len())
            .map_err(|_| Error::invalid_data("sequence exceeds the u32 count prefix"))?;
        encoder.writer.write_u32(len)?;
        for item in self {
            item.encode(encoder)?;
        }
        Ok(())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        let len = decoder.reader.read_u32()? as usize;
        let mut items = Vec::new();
        for _ in 0..len {
            items.push(T::decode(decoder)?);
        }
        Ok(items)
    }
}
