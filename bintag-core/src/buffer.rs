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

//! Byte-level sink and source wrappers.
//!
//! [`Writer`] and [`Reader`] own the session's byte order and translate
//! typed values to and from raw bytes. They differ deliberately in how they
//! treat running out of room:
//!
//! - A sink that stops accepting bytes mid-value is a fatal
//!   [`Error::ShortWrite`]; the sink keeps the partial prefix written so far.
//! - A source that runs out of bytes is **not** an error: the fill loop
//!   keeps requesting data until the count is satisfied or the source
//!   reports end of input, and the unread remainder stays zero. Callers
//!   relying on truncation detection must check [`Reader::bytes_consumed`].

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::config::Endian;
use crate::error::Error;

macro_rules! writer_fn {
    ($name:ident, $ty:ty, $size:expr, $method:ident) => {
        #[inline]
        pub fn $name(&mut self, value: $ty) -> Result<(), Error> {
            let mut buf = [0u8; $size];
            match self.endian {
                Endian::Big => BigEndian::$method(&mut buf, value),
                Endian::Little => LittleEndian::$method(&mut buf, value),
            }
            self.write_bytes(&buf)
        }
    };
}

/// Typed writer over an [`io::Write`] sink.
pub struct Writer<W> {
    sink: W,
    endian: Endian,
    written: usize,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W, endian: Endian) -> Self {
        Writer {
            sink,
            endian,
            written: 0,
        }
    }

    /// Bytes successfully handed to the sink so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Writes the whole buffer, or fails with [`Error::ShortWrite`] if the
    /// sink stops accepting bytes before the end.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let mut written = 0;
        while written < bytes.len() {
            match self.sink.write(&bytes[written..]) {
                Ok(0) => {
                    self.written += written;
                    return Err(Error::short_write(written, bytes.len()));
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.written += written;
                    return Err(e.into());
                }
            }
        }
        self.written += written;
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.write_bytes(&[value])
    }

    #[inline]
    pub fn write_i8(&mut self, value: i8) -> Result<(), Error> {
        self.write_bytes(&[value as u8])
    }

    writer_fn!(write_u16, u16, 2, write_u16);
    writer_fn!(write_i16, i16, 2, write_i16);
    writer_fn!(write_u32, u32, 4, write_u32);
    writer_fn!(write_i32, i32, 4, write_i32);
    writer_fn!(write_u64, u64, 8, write_u64);
    writer_fn!(write_i64, i64, 8, write_i64);
    writer_fn!(write_f32, f32, 4, write_f32);
    writer_fn!(write_f64, f64, 8, write_f64);

    /// Platform-width integers always occupy 8 bytes on the wire.
    #[inline]
    pub fn write_usize(&mut self, value: usize) -> Result<(), Error> {
        self.write_u64(value as u64)
    }

    #[inline]
    pub fn write_isize(&mut self, value: isize) -> Result<(), Error> {
        self.write_i64(value as i64)
    }
}

macro_rules! reader_fn {
    ($name:ident, $ty:ty, $size:expr, $method:ident) => {
        #[inline]
        pub fn $name(&mut self) -> Result<$ty, Error> {
            let buf = self.read_array::<$size>()?;
            Ok(match self.endian {
                Endian::Big => BigEndian::$method(&buf),
                Endian::Little => LittleEndian::$method(&buf),
            })
        }
    };
}

/// Typed reader over an [`io::Read`] source.
pub struct Reader<R> {
    src: R,
    endian: Endian,
    consumed: usize,
}

impl<R: Read> Reader<R> {
    pub fn new(src: R, endian: Endian) -> Self {
        Reader {
            src,
            endian,
            consumed: 0,
        }
    }

    /// Bytes actually obtained from the source so far. Zero-filled
    /// remainders after end of input do not count.
    pub fn bytes_consumed(&self) -> usize {
        self.consumed
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.src
    }

    /// The fill loop: keeps requesting bytes until `buf` is full or the
    /// source reports end of input. Bytes past end of input stay zero and
    /// this is not surfaced as a failure.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.src.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.consumed += filled;
                    return Err(e.into());
                }
            }
        }
        self.consumed += filled;
        Ok(())
    }

    /// Reads `len` bytes, zero-filling past end of input.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    reader_fn!(read_u16, u16, 2, read_u16);
    reader_fn!(read_i16, i16, 2, read_i16);
    reader_fn!(read_u32, u32, 4, read_u32);
    reader_fn!(read_i32, i32, 4, read_i32);
    reader_fn!(read_u64, u64, 8, read_u64);
    reader_fn!(read_i64, i64, 8, read_i64);
    reader_fn!(read_f32, f32, 4, read_f32);
    reader_fn!(read_f64, f64, 8, read_f64);

    #[inline]
    pub fn read_usize(&mut self) -> Result<usize, Error> {
        Ok(self.read_u64()? as usize)
    }

    #[inline]
    pub fn read_isize(&mut self) -> Result<isize, Error> {
        Ok(self.read_i64()? as isize)
    }
}
