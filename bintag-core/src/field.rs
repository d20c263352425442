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

//! Struct field metadata and the tag-based inclusion rule.
//!
//! `#[derive(Codec)]` emits one [`FieldDescriptor`] per field as a `'static`
//! table in declaration order. The table is immutable and built at compile
//! time, so it is safe to share between concurrent sessions. Tags never
//! appear on the wire; they only gate whether a field is written/read at
//! all. The byte layout of an included field is fixed by declaration order.

use crate::config::EXCLUDE_TAG;

/// Metadata for one struct field: declared name, position in declaration
/// order, and the `(tag name, tag value)` pairs from its `#[bintag(...)]`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub index: usize,
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldDescriptor {
    /// Resolves the tag value for `tag_name`, if the field carries one.
    pub fn tag(&self, tag_name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag_name)
            .map(|(_, value)| *value)
    }

    /// The inclusion rule, identical for encode and decode.
    pub fn included(&self, tag_name: &str, only_tagged: bool) -> bool {
        if !only_tagged {
            return true;
        }
        match self.tag(tag_name) {
            Some(value) => !value.is_empty() && value != EXCLUDE_TAG,
            None => false,
        }
    }
}
