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

//! Type classification vocabulary.
//!
//! Every [`Codec`](crate::codec::Codec) implementation reports a [`Kind`]
//! describing its wire category. The classification is derived from the
//! static type alone, so it is a compile-time constant per type; the engine
//! consults it where a category must be rejected before any bytes move
//! (notably map key/value types).

use std::fmt;

/// Fixed-width scalar categories and their wire widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Platform-width signed integer; always 8 bytes on the wire.
    Isize,
    /// Platform-width unsigned integer; always 8 bytes on the wire.
    Usize,
    F32,
    F64,
    /// Two IEEE-754 binary32 values, real part first.
    Complex64,
    /// Two IEEE-754 binary64 values, real part first.
    Complex128,
}

impl Scalar {
    /// Number of bytes this scalar occupies on the wire.
    pub const fn width(self) -> usize {
        match self {
            Scalar::Bool | Scalar::I8 | Scalar::U8 => 1,
            Scalar::I16 | Scalar::U16 => 2,
            Scalar::I32 | Scalar::U32 | Scalar::F32 => 4,
            Scalar::I64 | Scalar::U64 | Scalar::Isize | Scalar::Usize => 8,
            Scalar::F64 | Scalar::Complex64 => 8,
            Scalar::Complex128 => 16,
        }
    }
}

/// Categories the engine refuses to serialize, wherever they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forbidden {
    /// A raw memory address (`*const T` / `*mut T`).
    RawPointer,
    /// A concurrency channel endpoint.
    Channel,
    /// A callable.
    Function,
    /// A dynamically-typed value (`Box<dyn Any>`).
    Dynamic,
}

impl fmt::Display for Forbidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Forbidden::RawPointer => "raw pointer",
            Forbidden::Channel => "channel",
            Forbidden::Function => "function",
            Forbidden::Dynamic => "dynamic value",
        };
        f.write_str(name)
    }
}

/// Wire category of a type: the classification the encoder and decoder
/// dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Scalar(Scalar),
    /// Length-prefixed UTF-8 text.
    Str,
    /// Fixed-size sequence; element count is part of the type, no prefix.
    Array,
    /// Variable-size sequence with an element-count prefix.
    List,
    /// Associative container with an entry-count prefix.
    Map,
    /// Fields in declaration order, no markers, no prefix.
    Struct,
    /// Nilable wrapper: absent values contribute zero bytes.
    Optional,
    /// Rejected with [`Error::UnsupportedKind`](crate::error::Error).
    Forbidden(Forbidden),
}

impl Kind {
    /// Returns the forbidden category, if this kind is one.
    pub const fn forbidden(self) -> Option<Forbidden> {
        match self {
            Kind::Forbidden(f) => Some(f),
            _ => None,
        }
    }
}
