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

//! # Bintag Derive Macros
//!
//! Procedural macro support for the bintag serialization library.
//!
//! ## `#[derive(Codec)]`
//!
//! Generates a `Codec` implementation for a struct by encoding its fields
//! in declaration order. Per-field tags control which fields participate
//! when a session runs in only-tagged mode:
//!
//! ```rust
//! use bintag_derive::Codec;
//!
//! #[derive(Codec, Debug, PartialEq)]
//! struct Record {
//!     #[bintag(bin = "id")]
//!     id: u64,
//!     #[bintag(bin = "name", audit = "-")]
//!     name: String,
//!     scratch: u32,
//! }
//! ```
//!
//! A field tagged `"-"` under the session's tag name is excluded in
//! only-tagged mode; untagged fields are excluded there too. Outside
//! only-tagged mode every field is encoded regardless of tags.
//!
//! **Supported shapes:**
//! - Structs with named fields
//! - Tuple structs
//! - Unit structs
//!
//! Enums and unions are rejected with a compile error; model variants as
//! tagged structs or implement `Codec` by hand.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;

/// Derive macro for struct serialization.
///
/// Implements `Codec` and `StructCodec` for the annotated struct. Field
/// metadata from `#[bintag(...)]` attributes is captured in a static
/// descriptor table consulted by the encoder's tag resolver.
#[proc_macro_derive(Codec, attributes(bintag))]
pub fn derive_codec(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
