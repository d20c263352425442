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

use bintag::{from_bytes, to_bytes, Decoder, Encoder, Endian};
use num_complex::{Complex32, Complex64};

#[test]
fn test_u8_single_byte() {
    assert_eq!(to_bytes(&6u8).unwrap(), [0x06]);
    assert_eq!(from_bytes::<u8>(&[0x06]).unwrap(), (6, 1));
}

#[test]
fn test_signed_bytes_two_complement() {
    assert_eq!(to_bytes(&-2i8).unwrap(), [0xfe]);
    assert_eq!(from_bytes::<i8>(&[0xfe]).unwrap(), (-2, 1));
}

#[test]
fn test_u16_big_endian() {
    assert_eq!(to_bytes(&0x0102u16).unwrap(), [0x01, 0x02]);
}

#[test]
fn test_i32_negative() {
    assert_eq!(to_bytes(&-1i32).unwrap(), [0xff, 0xff, 0xff, 0xff]);
    assert_eq!(
        from_bytes::<i32>(&[0xff, 0xff, 0xff, 0xff]).unwrap(),
        (-1, 4)
    );
}

#[test]
fn test_i64_wide() {
    assert_eq!(to_bytes(&4i64).unwrap(), [0, 0, 0, 0, 0, 0, 0, 4]);
}

#[test]
fn test_platform_ints_always_eight_bytes() {
    assert_eq!(to_bytes(&4usize).unwrap(), [0, 0, 0, 0, 0, 0, 0, 4]);
    assert_eq!(
        to_bytes(&-4isize).unwrap(),
        [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc]
    );
    assert_eq!(from_bytes::<usize>(&[0, 0, 0, 0, 0, 0, 0, 4]).unwrap(), (4, 8));
}

#[test]
fn test_f32_ieee754() {
    assert_eq!(to_bytes(&3.14f32).unwrap(), [0x40, 0x48, 0xf5, 0xc3]);
    let (value, consumed) = from_bytes::<f32>(&[0x40, 0x48, 0xf5, 0xc3]).unwrap();
    assert_eq!(value, 3.14f32);
    assert_eq!(consumed, 4);
}

#[test]
fn test_f64_ieee754() {
    assert_eq!(
        to_bytes(&3.14f64).unwrap(),
        [0x40, 0x09, 0x1e, 0xb8, 0x51, 0xeb, 0x85, 0x1f]
    );
}

#[test]
fn test_bool_one_byte() {
    assert_eq!(to_bytes(&true).unwrap(), [0x01]);
    assert_eq!(to_bytes(&false).unwrap(), [0x00]);
    assert_eq!(from_bytes::<bool>(&[0x01]).unwrap(), (true, 1));
    assert_eq!(from_bytes::<bool>(&[0x00]).unwrap(), (false, 1));
}

#[test]
fn test_complex32_real_then_imaginary() {
    let value = Complex32::new(123.0, 0.0);
    assert_eq!(
        to_bytes(&value).unwrap(),
        [0x42, 0xf6, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    let (decoded, consumed) = from_bytes::<Complex32>(&to_bytes(&value).unwrap()).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(consumed, 8);
}

#[test]
fn test_complex64_real_then_imaginary() {
    let value = Complex64::new(123.0, 0.0);
    let mut expected = vec![0x40, 0x5e, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00];
    expected.extend_from_slice(&[0; 8]);
    assert_eq!(to_bytes(&value).unwrap(), expected);
}

#[test]
fn test_little_endian_session() {
    let mut encoder = Encoder::new(Vec::new()).endian(Endian::Little);
    encoder.encode(&0x0102u16).unwrap();
    encoder.encode(&4u64).unwrap();
    let bytes = encoder.into_inner();
    assert_eq!(bytes, [0x02, 0x01, 4, 0, 0, 0, 0, 0, 0, 0]);

    let mut decoder = Decoder::new(bytes.as_slice()).endian(Endian::Little);
    assert_eq!(decoder.decode::<u16>().unwrap(), 0x0102);
    assert_eq!(decoder.decode::<u64>().unwrap(), 4);
    assert_eq!(decoder.bytes_consumed(), 10);
}

#[test]
fn test_scalar_round_trips() {
    macro_rules! round_trip {
        ($value:expr, $ty:ty) => {
            let bytes = to_bytes::<$ty>(&$value).unwrap();
            let (decoded, consumed) = from_bytes::<$ty>(&bytes).unwrap();
            assert_eq!(decoded, $value);
            assert_eq!(consumed, bytes.len());
        };
    }
    round_trip!(u8::MAX, u8);
    round_trip!(i16::MIN, i16);
    round_trip!(u32::MAX, u32);
    round_trip!(i64::MIN, i64);
    round_trip!(f64::MAX, f64);
}
