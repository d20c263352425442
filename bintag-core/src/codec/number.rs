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

macro_rules! impl_number_codec {
    ($ty:ty, $scalar:expr, $write:ident, $read:ident) => {
        impl Codec for $ty {
            #[inline(always)]
            fn kind() -> Kind {
                Kind::Scalar($scalar)
            }

            #[inline(always)]
            fn default_value() -> Self {
                0 as $ty
            }

            #[inline]
            fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
                encoder.writer.$write(*self)
            }

            #[inline]
            fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
                decoder.reader.$read()
            }
        }
    };
}

impl_number_codec!(u8, Scalar::U8, write_u8, read_u8);
impl_number_codec!(i8, Scalar::I8, write_i8, read_i8);
impl_number_codec!(u16, Scalar::U16, write_u16, read_u16);
impl_number_codec!(i16, Scalar::I16, write_i16, read_i16);
impl_number_codec!(u32, Scalar::U32, write_u32, read_u32);
impl_number_codec!(i32, Scalar::I32, write_i32, read_i32);
impl_number_codec!(u64, Scalar::U64, write_u64, read_u64);
impl_number_codec!(i64, Scalar::I64, write_i64, read_i64);
impl_number_codec!(usize, Scalar::Usize, write_usize, read_usize);
impl_number_codec!(isize, Scalar::Isize, write_isize, read_isize);
impl_number_codec!(f32, Scalar::F32, write_f32, read_f32);
impl_number_codec!(f64, Scalar::F64, write_f64, read_f64);
