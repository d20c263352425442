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

use crate::field::FieldDescriptor;

/// Tag name looked up on struct fields when no session override is given.
pub const DEFAULT_TAG: &str = "bin";

/// Sentinel tag value marking a field as excluded in only-tagged mode.
pub const EXCLUDE_TAG: &str = "-";

/// Byte order for multi-byte wire values.
///
/// One session uses a single byte order for everything it writes or reads;
/// mixing orders mid-stream is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// Session configuration shared by [`Encoder`](crate::encoder::Encoder) and
/// [`Decoder`](crate::decoder::Decoder).
///
/// The defaults are process-wide constants ([`DEFAULT_TAG`], big-endian,
/// only-tagged off) and are never mutated after process start, so concurrent
/// sessions stay independent.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte order for all multi-byte values in this session.
    pub endian: Endian,
    /// Tag name consulted for field inclusion.
    pub tag: Cow<'static, str>,
    /// When set, only fields carrying a non-empty, non-excluded tag for the
    /// active tag name are encoded/decoded.
    pub only_tagged: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endian: Endian::Big,
            tag: Cow::Borrowed(DEFAULT_TAG),
            only_tagged: false,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a struct field takes part in this session.
    ///
    /// With only-tagged mode off every field is included, even one whose tag
    /// is the [`EXCLUDE_TAG`] sentinel. With only-tagged mode on, a field is
    /// included only if it carries a non-empty tag other than the sentinel
    /// for the active tag name.
    #[inline]
    pub fn include_field(&self, field: &FieldDescriptor) -> bool {
        field.included(&self.tag, self.only_tagged)
    }
}
