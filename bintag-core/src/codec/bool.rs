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
use crate::types::{Kind, Scalar};

impl Codec for bool {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::Scalar(Scalar::Bool)
    }

    #[inline(always)]
    fn default_value() -> Self {
        false
    }

    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        encoder.writer.write_u8(*self as u8)
    }

    /// Any nonzero byte decodes as `true`.
    #[inline]
    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        Ok(decoder.reader.read_u8()? != 0)
    }
}
