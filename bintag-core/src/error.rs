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

use std::borrow::Cow;
use std::io;

use thiserror::Error;

use crate::types::Forbidden;

/// Error type for bintag encoding and decoding operations.
///
/// All failures are synchronous return values; the engine never retries an
/// operation on its own. Custom [`Codec`](crate::codec::Codec)
/// implementations report their own failures through the same type, and the
/// engine propagates them verbatim.
///
/// Note that a truncated source is deliberately *not* an error: reads past
/// end of input yield zero bytes (see [`Reader`](crate::buffer::Reader)).
/// Callers that need truncation detection must compare the consumed-byte
/// count against the input length themselves.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The value, or a nested element/key/value, belongs to a category the
    /// engine refuses to serialize.
    #[error("can't handle {0}")]
    UnsupportedKind(Forbidden),

    /// The sink accepted fewer bytes than requested. Immediately fatal; the
    /// sink is left holding a partial prefix.
    #[error("only {written} bytes of {requested} written")]
    ShortWrite { written: usize, requested: usize },

    /// The payload cannot be represented, or decoded bytes are not a valid
    /// value of the target type.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    /// The sink or source reported an I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a new [`Error::UnsupportedKind`] naming the rejected category.
    #[cold]
    #[track_caller]
    pub fn unsupported_kind(kind: Forbidden) -> Self {
        Error::UnsupportedKind(kind)
    }

    /// Creates a new [`Error::ShortWrite`] with the written/requested counts.
    #[cold]
    #[track_caller]
    pub fn short_write(written: usize, requested: usize) -> Self {
        Error::ShortWrite { written, requested }
    }

    /// Creates a new [`Error::InvalidData`] from a string or static message.
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::InvalidData(s.into())
    }
}
