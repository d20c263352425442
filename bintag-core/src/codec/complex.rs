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

//! Complex scalars: real part first, then imaginary, each in the session
//! byte order.

use std::io::{Read, Write};

use num_complex::{Complex32, Complex64};

use crate::codec::Codec;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{Kind, Scalar};

impl Codec for Complex32 {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::Scalar(Scalar::Complex64)
    }

    #[inline(always)]
    fn default_value() -> Self {
        Complex32::new(0.0, 0.0)
    }

    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        encoder.writer.write_f32(self.re)?;
        encoder.writer.write_f32(self.im)
    }

    #[inline]
    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        let re = decoder.reader.read_f32()?;
        let im = decoder.reader.read_f32()?;
        Ok(Complex32::new(re, im))
    }
}

impl Codec for Complex64 {
    #[inline(always)]
    fn kind() -> Kind {
        Kind::Scalar(Scalar::Complex128)
    }

    #[inline(always)]
    fn default_value() -> Self {
        Complex64::new(0.0, 0.0)
    }

    #[inline]
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        encoder.writer.write_f64(self.re)?;
        encoder.writer.write_f64(self.im)
    }

    #[inline]
    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        let re = decoder.reader.read_f64()?;
        let im = decoder.reader.read_f64()?;
        Ok(Complex64::new(re, im))
    }
}
