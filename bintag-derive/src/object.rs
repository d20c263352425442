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

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{
    Data, DeriveInput, Error, Expr, ExprLit, Field, Fields, GenericParam, Generics, Index, Lit,
    Member, MetaNameValue, Token,
};

/// Per-field data collected from the struct definition: the wire identity
/// plus every `#[bintag(key = "value")]` pair, in attribute order.
struct FieldMeta {
    member: Member,
    name: String,
    tags: Vec<(String, String)>,
}

pub fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let fields = match &input.data {
        Data::Struct(data) => collect_fields(&data.fields)?,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                input,
                "Codec cannot be derived for enums; implement the trait manually",
            ))
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "Codec cannot be derived for unions",
            ))
        }
    };

    let ident = &input.ident;
    let generics = add_codec_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors = fields.iter().enumerate().map(|(index, meta)| {
        let name = &meta.name;
        let pairs = meta.tags.iter().map(|(key, value)| quote! { (#key, #value) });
        quote! {
            bintag_core::field::FieldDescriptor {
                name: #name,
                index: #index,
                tags: &[#(#pairs),*],
            }
        }
    });

    let encode_fields = fields.iter().enumerate().map(|(index, meta)| {
        let member = &meta.member;
        quote! {
            if encoder.include_field(&<Self as bintag_core::codec::StructCodec>::FIELDS[#index]) {
                bintag_core::codec::Codec::encode(&self.#member, encoder)?;
            }
        }
    });

    let decode_bindings = fields.iter().enumerate().map(|(index, meta)| {
        let binding = format_ident!("__field_{}", index);
        let ty = field_type(&input.data, index);
        quote! {
            let #binding: #ty = if decoder
                .include_field(&<Self as bintag_core::codec::StructCodec>::FIELDS[#index])
            {
                <#ty as bintag_core::codec::Codec>::decode(decoder)?
            } else {
                <#ty as bintag_core::codec::Codec>::default_value()
            };
        }
    });

    let default_bindings = fields.iter().enumerate().map(|(index, _)| {
        let binding = format_ident!("__field_{}", index);
        let ty = field_type(&input.data, index);
        quote! {
            let #binding: #ty = <#ty as bintag_core::codec::Codec>::default_value();
        }
    });

    let construct = construct_from_bindings(&input.data, &fields);
    let construct_default = construct.clone();

    let (encoder_param, decoder_param) = if fields.is_empty() {
        (quote! { _encoder }, quote! { _decoder })
    } else {
        (quote! { encoder }, quote! { decoder })
    };

    Ok(quote! {
        impl #impl_generics bintag_core::codec::Codec for #ident #ty_generics #where_clause {
            fn kind() -> bintag_core::types::Kind {
                bintag_core::types::Kind::Struct
            }

            fn default_value() -> Self {
                #(#default_bindings)*
                #construct_default
            }

            fn encode<W: std::io::Write>(
                &self,
                #encoder_param: &mut bintag_core::encoder::Encoder<W>,
            ) -> Result<(), bintag_core::error::Error> {
                #(#encode_fields)*
                Ok(())
            }

            fn decode<R: std::io::Read>(
                #decoder_param: &mut bintag_core::decoder::Decoder<R>,
            ) -> Result<Self, bintag_core::error::Error> {
                #(#decode_bindings)*
                Ok(#construct)
            }
        }

        impl #impl_generics bintag_core::codec::StructCodec for #ident #ty_generics #where_clause {
            const FIELDS: &'static [bintag_core::field::FieldDescriptor] =
                &[#(#descriptors),*];
        }
    })
}

fn collect_fields(fields: &Fields) -> Result<Vec<FieldMeta>, Error> {
    let named = matches!(fields, Fields::Named(_));
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = if named {
                match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => unreachable!("named struct field without an identifier"),
                }
            } else {
                Member::Unnamed(Index::from(index))
            };
            let name = match &field.ident {
                Some(ident) => ident.to_string(),
                None => index.to_string(),
            };
            Ok(FieldMeta {
                member,
                name,
                tags: parse_tags(field)?,
            })
        })
        .collect()
}

/// Parses `#[bintag(key = "value", ...)]`. Later attributes append; the
/// resolver sees pairs in source order and takes the first match per key.
fn parse_tags(field: &Field) -> Result<Vec<(String, String)>, Error> {
    let mut tags = Vec::new();
    for attr in &field.attrs {
        if !attr.path().is_ident("bintag") {
            continue;
        }
        let pairs =
            attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for pair in pairs {
            let key = pair
                .path
                .get_ident()
                .ok_or_else(|| Error::new_spanned(&pair.path, "expected a tag name identifier"))?
                .to_string();
            let value = match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.value(),
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "tag values must be string literals",
                    ))
                }
            };
            tags.push((key, value));
        }
    }
    Ok(tags)
}

fn field_type(data: &Data, index: usize) -> TokenStream {
    match data {
        Data::Struct(data) => {
            let field = data
                .fields
                .iter()
                .nth(index)
                .unwrap_or_else(|| unreachable!("field index out of range"));
            let ty = &field.ty;
            quote! { #ty }
        }
        _ => unreachable!("only structs reach field_type"),
    }
}

fn construct_from_bindings(data: &Data, fields: &[FieldMeta]) -> TokenStream {
    let shape = match data {
        Data::Struct(data) => &data.fields,
        _ => unreachable!("only structs reach construct_from_bindings"),
    };
    match shape {
        Fields::Named(_) => {
            let inits = fields.iter().enumerate().map(|(index, meta)| {
                let member = &meta.member;
                let binding = format_ident!("__field_{}", index);
                quote! { #member: #binding }
            });
            quote! { Self { #(#inits),* } }
        }
        Fields::Unnamed(_) => {
            let bindings = (0..fields.len()).map(|index| format_ident!("__field_{}", index));
            quote! { Self(#(#bindings),*) }
        }
        Fields::Unit => quote! { Self },
    }
}

fn add_codec_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(syn::parse_quote!(bintag_core::codec::Codec));
        }
    }
    generics
}
