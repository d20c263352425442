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

//! # Bintag
//!
//! Bintag is a compact binary serialization library with attribute-driven
//! field selection. A `#[derive(Codec)]` on a struct is all the marshaling
//! code a type needs; the wire format is fixed-width, prefix-delimited and
//! carries no type information of its own.
//!
//! ## Key Features
//!
//! - **Derived codecs**: One derive per struct, no hand-written visitors
//! - **Tag gating**: `#[bintag(name = "...")]` attributes select which
//!   fields a tagged session encodes, with `"-"` as an exclusion sentinel
//! - **Configurable byte order**: Big-endian by default, little-endian per
//!   session
//! - **Streaming**: Sessions run over any `io::Write`/`io::Read`, and
//!   consecutive values share one stream
//!
//! ## Quick Start
//!
//! ```rust
//! use bintag::{from_bytes, to_bytes, Codec, Error};
//!
//! #[derive(Codec, Debug, PartialEq)]
//! struct Point {
//!     x: u16,
//!     y: u16,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let point = Point { x: 1, y: 2 };
//! let bytes = to_bytes(&point)?;
//! assert_eq!(bytes, [0, 1, 0, 2]);
//!
//! let (decoded, consumed) = from_bytes::<Point>(&bytes)?;
//! assert_eq!(decoded, point);
//! assert_eq!(consumed, 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tagged Sessions
//!
//! A session created with a tag name runs in only-tagged mode: only fields
//! carrying a non-empty value under that tag participate, and the value
//! `"-"` excludes a field outright. Encoder and decoder must be configured
//! identically or the stream will be misread.
//!
//! ```rust
//! use bintag::{from_bytes_tagged, to_bytes_tagged, Codec, Error};
//!
//! #[derive(Codec, Debug, PartialEq, Default)]
//! struct Login {
//!     #[bintag(wire = "user")]
//!     user: String,
//!     password: String,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let login = Login { user: "ada".into(), password: "hunter2".into() };
//! let bytes = to_bytes_tagged(&login, "wire")?;
//!
//! let (decoded, _) = from_bytes_tagged::<Login>(&bytes, "wire")?;
//! assert_eq!(decoded.user, "ada");
//! assert_eq!(decoded.password, "");
//! # Ok(())
//! # }
//! ```

pub use bintag_core::codec::{Codec, StructCodec};
pub use bintag_core::config::{Config, Endian, DEFAULT_TAG, EXCLUDE_TAG};
pub use bintag_core::decoder::{from_bytes, from_bytes_tagged, Decoder};
pub use bintag_core::encoder::{to_bytes, to_bytes_tagged, Encoder};
pub use bintag_core::error::Error;
pub use bintag_core::field::FieldDescriptor;
pub use bintag_core::types::{Forbidden, Kind, Scalar};

pub use bintag_derive::Codec;
