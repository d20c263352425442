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

//! Categories with no sensible byte representation: raw pointers, channel
//! endpoints, function pointers and dynamically-typed values. They carry a
//! `Codec` impl so they can appear inside generic containers and so the
//! rejection happens at encode/decode time with a precise error, matching
//! the classifier table rather than a trait-bound failure at a distance.

use std::any::Any;
use std::io::{Read, Write};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::codec::Codec;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Error;
use crate::types::{Forbidden, Kind};

macro_rules! reject {
    ($which:expr) => {
        fn encode<W: Write>(&self, _encoder: &mut Encoder<W>) -> Result<(), Error> {
            Err(Error::unsupported_kind($which))
        }

        fn decode<R: Read>(_decoder: &mut Decoder<R>) -> Result<Self, Error> {
            Err(Error::unsupported_kind($which))
        }
    };
}

impl<T: 'static> Codec for *const T {
    fn kind() -> Kind {
        Kind::Forbidden(Forbidden::RawPointer)
    }

    fn default_value() -> Self {
        std::ptr::null()
    }

    reject!(Forbidden::RawPointer);
}

impl<T: 'static> Codec for *mut T {
    fn kind() -> Kind {
        Kind::Forbidden(Forbidden::RawPointer)
    }

    fn default_value() -> Self {
        std::ptr::null_mut()
    }

    reject!(Forbidden::RawPointer);
}

impl<T: 'static> Codec for Sender<T> {
    fn kind() -> Kind {
        Kind::Forbidden(Forbidden::Channel)
    }

    fn default_value() -> Self {
        channel().0
    }

    reject!(Forbidden::Channel);
}

impl<T: 'static> Codec for Receiver<T> {
    fn kind() -> Kind {
        Kind::Forbidden(Forbidden::Channel)
    }

    fn default_value() -> Self {
        channel().1
    }

    reject!(Forbidden::Channel);
}

// Function pointers have no empty value, but decode refuses before any
// construction could be reached.
macro_rules! impl_forbidden_fn {
    ($($arg:ident),*) => {
        impl<Ret: 'static $(, $arg: 'static)*> Codec for fn($($arg),*) -> Ret {
            fn kind() -> Kind {
                Kind::Forbidden(Forbidden::Function)
            }

            fn default_value() -> Self {
                unreachable!("function pointers are never materialized")
            }

            reject!(Forbidden::Function);
        }
    };
}

impl_forbidden_fn!();
impl_forbidden_fn!(A);
impl_forbidden_fn!(A, B);
impl_forbidden_fn!(A, B, C);
impl_forbidden_fn!(A, B, C, D);

impl Codec for Box<dyn Any> {
    fn kind() -> Kind {
        Kind::Forbidden(Forbidden::Dynamic)
    }

    fn default_value() -> Self {
        Box::new(())
    }

    reject!(Forbidden::Dynamic);
}
