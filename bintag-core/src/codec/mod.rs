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

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::field::FieldDescriptor;
use crate::types::Kind;

mod array;
mod bool;
mod box_;
mod complex;
mod forbidden;
mod list;
mod map;
mod number;
mod option;
mod string;

/// A type the engine knows how to put on and take off the wire.
///
/// Built-in impls cover the scalar, string, sequence, map and optional
/// categories; `#[derive(Codec)]` covers structs. Implementing this trait by
/// hand is the custom-codec escape hatch: a manual impl fully replaces the
/// built-in category rules for that type, so a defined integer type is free
/// to pick, say, an 8-byte representation regardless of its underlying
/// width. Failures from custom impls are propagated verbatim.
pub trait Codec: Sized {
    /// Wire category of this type, derived from the static type alone.
    fn kind() -> Kind;

    /// The value given to fields skipped by the inclusion rule on decode.
    fn default_value() -> Self;

    /// Writes this value to the session sink.
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error>;

    /// Reads a value of this type from the session source.
    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error>;
}

/// Extra surface for derived struct codecs: the per-field metadata table,
/// in declaration order.
pub trait StructCodec: Codec {
    const FIELDS: &'static [FieldDescriptor];

    fn fields() -> &'static [FieldDescriptor] {
        Self::FIELDS
    }
}
