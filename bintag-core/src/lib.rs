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

//! # Bintag Core
//!
//! This is the core implementation of the bintag binary serialization
//! library. It turns in-memory values into compact, self-describing-free
//! byte streams and back, with field selection driven by struct attributes.
//!
//! ## Architecture
//!
//! The library is organized into a handful of modules:
//!
//! - **`encoder`** / **`decoder`**: Session objects that walk a value and
//!   move its bytes through a sink or source
//! - **`buffer`**: Byte-order-aware `Writer`/`Reader` over any
//!   `io::Write`/`io::Read`
//! - **`codec`**: The `Codec` trait plus implementations for every
//!   supported category, one file per category
//! - **`config`**: Session configuration, byte order and tag selection
//! - **`field`**: Static per-field metadata emitted by the derive macro
//! - **`types`**: Category classification of encodable types
//! - **`error`**: Error handling and result types
//!
//! ## Wire format
//!
//! Scalars are fixed-width big-endian by default (configurable per
//! session). Platform-sized integers always occupy 8 bytes. Strings,
//! vectors and maps carry a 4-byte unsigned count prefix; fixed-size
//! arrays carry none. There are no type markers on the wire, so encoder
//! and decoder must agree on the type ahead of time.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod field;
pub mod types;

pub use codec::{Codec, StructCodec};
pub use config::{Config, Endian, DEFAULT_TAG, EXCLUDE_TAG};
pub use decoder::{from_bytes, from_bytes_tagged, Decoder};
pub use encoder::{to_bytes, to_bytes_tagged, Encoder};
pub use error::Error;
pub use field::FieldDescriptor;
pub use types::{Forbidden, Kind, Scalar};
