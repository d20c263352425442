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

//! Associative containers: a 4-byte unsigned entry-count prefix, then for
//! each entry the key encoding immediately followed by the value encoding.
//!
//! `HashMap` entry order on the wire is whatever the container iterates at
//! encode time, which is not reproducible across runs. Equivalence of two
//! encodings must be judged by reconstructed content, never by raw bytes.
//! `BTreeMap` iterates sorted by key and so happens to produce byte-stable
//! output, but only content equality is contractual.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::io::{Read, Write};

use crate::codec::Codec;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{Forbidden, Kind};

/// Dynamically-typed keys or values are rejected before any bytes move,
/// even for an empty container.
fn check_entry_types<K: Codec, V: Codec>() -> Result<(), Error> {
    for kind in [K::kind(), V::kind()] {
        if kind == Kind::Forbidden(Forbidden::Dynamic) {
            return Err(Error::unsupported_kind(Forbidden::Dynamic));
        }
    }
    Ok(())
}

macro_rules! impl_map_codec {
    ($map:ident, $($bound:tt)+) => {
        impl<K: Codec + $($bound)+, V: Codec> Codec for $map<K, V> {
            #[inline(always)]
            fn kind() -> Kind {
                Kind::Map
            }

            #[inline(always)]
            fn default_value() -> Self {
                $map::new()
            }

            fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), Error> {
                check_entry_types::<K, V>()?;
                let len = u32::try_from(self.len())
                    .map_err(|_| Error::invalid_data("map exceeds the u32 count prefix"))?;
                encoder.writer.write_u32(len)?;
                for (key, value) in self {
                    key.encode(encoder)?;
                    value.encode(encoder)?;
                }
                Ok(())
            }

            fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, Error> {
                check_entry_types::<K, V>()?;
                let len = decoder.reader.read_u32()? as usize;
                let mut map = $map::new();
                for _ in 0..len {
                    let key = K::decode(decoder)?;
                    let value = V::decode(decoder)?;
                    map.insert(key, value);
                }
                Ok(map)
            }
        }
    };
}

impl_map_codec!(HashMap, Eq + Hash);
impl_map_codec!(BTreeMap, Ord);
