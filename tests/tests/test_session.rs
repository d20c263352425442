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

use std::io::{self, Write};

use bintag::{from_bytes, to_bytes, Decoder, Encoder, Error};

#[test]
fn test_top_level_none_encodes_nothing() {
    let value: Option<u64> = None;
    assert!(to_bytes(&value).unwrap().is_empty());
}

#[test]
fn test_some_is_transparent_on_the_wire() {
    let value = Some(7u16);
    assert_eq!(to_bytes(&value).unwrap(), [0, 7]);
}

#[test]
fn test_option_decode_always_allocates() {
    // There is no presence marker; decode reads a value even from an
    // empty source, where zero-fill produces the default.
    let (decoded, consumed) = from_bytes::<Option<u64>>(&[]).unwrap();
    assert_eq!(decoded, Some(0));
    assert_eq!(consumed, 0);
}

#[test]
fn test_decode_into_none_target_is_a_noop() {
    let data = [0xde, 0xad, 0xbe, 0xef];
    let mut decoder = Decoder::new(data.as_slice());
    decoder.decode_into::<u32>(None).unwrap();
    assert_eq!(decoder.bytes_consumed(), 0);

    let mut slot = 0u32;
    decoder.decode_into(Some(&mut slot)).unwrap();
    assert_eq!(slot, 0xdead_beef);
    assert_eq!(decoder.bytes_consumed(), 4);
}

#[test]
fn test_truncated_source_zero_fills_silently() {
    // One real byte, seven zeros: the high byte of a big-endian u64.
    let (value, consumed) = from_bytes::<u64>(&[0x01]).unwrap();
    assert_eq!(value, 1 << 56);
    assert_eq!(consumed, 1);
}

#[test]
fn test_fully_empty_source_decodes_defaults() {
    let (value, consumed) = from_bytes::<u64>(&[]).unwrap();
    assert_eq!(value, 0);
    assert_eq!(consumed, 0);

    let (text, consumed) = from_bytes::<String>(&[]).unwrap();
    assert_eq!(text, "");
    assert_eq!(consumed, 0);
}

/// A sink that accepts a fixed number of bytes, then reports end of file.
struct LimitedSink {
    remaining: usize,
}

impl Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_short_write_is_fatal() {
    let mut encoder = Encoder::new(LimitedSink { remaining: 3 });
    let err = encoder.encode(&7u64).unwrap_err();
    match err {
        Error::ShortWrite { written, requested } => {
            assert_eq!(written, 3);
            assert_eq!(requested, 8);
        }
        other => panic!("expected ShortWrite, got {other:?}"),
    }
}

#[test]
fn test_sink_io_error_propagates() {
    struct FailingSink;
    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    let mut encoder = Encoder::new(FailingSink);
    assert!(matches!(encoder.encode(&7u64), Err(Error::Io(_))));
}

#[test]
fn test_session_reuse_shares_one_stream() {
    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(&1u16).unwrap();
    encoder.encode(&"ab".to_string()).unwrap();
    encoder.encode(&vec![3u8]).unwrap();
    let bytes = encoder.into_inner();
    assert_eq!(bytes, [0, 1, 0, 0, 0, 2, 0x61, 0x62, 0, 0, 0, 1, 3]);

    let mut decoder = Decoder::new(bytes.as_slice());
    assert_eq!(decoder.decode::<u16>().unwrap(), 1);
    assert_eq!(decoder.decode::<String>().unwrap(), "ab");
    assert_eq!(decoder.decode::<Vec<u8>>().unwrap(), [3]);
    assert_eq!(decoder.bytes_consumed(), bytes.len());
}
