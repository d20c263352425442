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

//! Hand-written `Codec` implementations override the category rules for a
//! type entirely; the engine recurses into them like any other impl.

use std::io::{Read, Write};

use bintag::{from_bytes, to_bytes, Codec, Decoder, Encoder, Error, Kind, Scalar};

/// A 4-byte integer that insists on occupying 8 bytes on the wire.
#[derive(Debug, PartialEq)]
struct WideInt(u32);

impl Codec for WideInt {
    fn kind() -> Kind {
        Kind::Scalar(Scalar::U64)
    }

    fn default_value() -> Self {
        WideInt(0)
    }

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
        encoder.writer.write_u64(u64::from(self.0))
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
        let wide = decoder.reader.read_u64()?;
        let value = u32::try_from(wide)
            .map_err(|_| Error::invalid_data("wide integer exceeds u32"))?;
        Ok(WideInt(value))
    }
}

#[test]
fn test_custom_width_override() {
    let bytes = to_bytes(&WideInt(11)).unwrap();
    assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 0x0b]);
    let (decoded, consumed) = from_bytes::<WideInt>(&bytes).unwrap();
    assert_eq!(decoded, WideInt(11));
    assert_eq!(consumed, 8);
}

#[test]
fn test_custom_codec_inside_containers() {
    let values = vec![WideInt(1), WideInt(2)];
    let bytes = to_bytes(&values).unwrap();
    assert_eq!(bytes.len(), 4 + 16);
    let (decoded, _) = from_bytes::<Vec<WideInt>>(&bytes).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn test_custom_decode_error_propagates() {
    let bytes = to_bytes(&u64::MAX).unwrap();
    let err = from_bytes::<WideInt>(&bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

/// A codec that always refuses, standing in for a type the application
/// never wants on the wire.
#[derive(Debug)]
struct Sealed;

impl Codec for Sealed {
    fn kind() -> Kind {
        Kind::Struct
    }

    fn default_value() -> Self {
        Sealed
    }

    fn encode<W: Write>(&self, _encoder: &mut Encoder<W>) -> Result<(), Error> {
        Err(Error::invalid_data("sealed values never leave the process"))
    }

    fn decode<R: Read>(_decoder: &mut Decoder<R>) -> Result<Self, Error> {
        Err(Error::invalid_data("sealed values never enter the process"))
    }
}

#[test]
fn test_custom_encode_error_stops_session() {
    let values = vec![Sealed, Sealed];
    assert!(to_bytes(&values).is_err());
}
