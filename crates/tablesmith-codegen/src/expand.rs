mod api;
mod module;
mod record;
mod repository;
mod service;
mod support;

pub(crate) use module::{expand_module_index, expand_root_module};
pub(crate) use support::expand_support;

use crate::names::ClassNames;

use tablesmith_core::{
    generate::ArtifactKind,
    model::{ClassMetadata, FieldMetadata, FieldTy},
    ty::ScalarType,
    Result,
};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The class being expanded
    class: &'a ClassMetadata,

    names: ClassNames,

    /// Path to the generated root module, as seen from an artifact file
    root: TokenStream,
}

impl<'a> Expand<'a> {
    fn new(class: &'a ClassMetadata) -> Expand<'a> {
        Expand {
            class,
            names: ClassNames::new(class),
            root: quote!(super::super),
        }
    }

    fn identifier(&self) -> Result<&'a FieldMetadata> {
        match self.class.identifier() {
            Some(field) => Ok(field),
            None => tablesmith_core::bail!("class `{}` has no identifier field", self.class.name),
        }
    }

    /// The bare (non-optional) type of the identifier, used for lookup keys.
    fn identifier_ty(&self) -> Result<TokenStream> {
        let field = self.identifier()?;

        match field.ty.as_scalar() {
            Some(ty) => Ok(scalar_ty(ty)),
            None => tablesmith_core::bail!(
                "identifier `{}` of class `{}` is not a scalar",
                field.name,
                self.class.name
            ),
        }
    }
}

/// Expands one artifact of one class.
pub(crate) fn artifact(kind: ArtifactKind, class: &ClassMetadata) -> Result<TokenStream> {
    let expand = Expand::new(class);

    match kind {
        ArtifactKind::Record => Ok(expand.expand_record()),
        ArtifactKind::Repository => expand.expand_repository(),
        ArtifactKind::Service => expand.expand_service(),
        ArtifactKind::Api => expand.expand_api(),
    }
}

fn scalar_ty(ty: &ScalarType) -> TokenStream {
    match ty {
        ScalarType::Bool => quote!(bool),
        ScalarType::I16 => quote!(i16),
        ScalarType::I32 => quote!(i32),
        ScalarType::I64 => quote!(i64),
        ScalarType::String => quote!(String),
        ScalarType::Decimal => quote!(rust_decimal::Decimal),
        ScalarType::F32 => quote!(f32),
        ScalarType::F64 => quote!(f64),
        ScalarType::Date => quote!(chrono::NaiveDate),
        ScalarType::Time => quote!(chrono::NaiveTime),
        ScalarType::Timestamp => quote!(chrono::NaiveDateTime),
        ScalarType::Unknown(_) => quote!(serde_json::Value),
    }
}

/// The declared type of a record field.
///
/// Records are default-constructed and populated afterwards, so the
/// identifier and every to-one reference start out empty.
fn field_ty(field: &FieldMetadata) -> TokenStream {
    match &field.ty {
        FieldTy::Scalar(ty) => {
            let ty = scalar_ty(ty);
            let nullable = field.column().is_some_and(|column| column.nullable);

            if field.is_identifier() || nullable {
                quote!(Option<#ty>)
            } else {
                ty
            }
        }
        FieldTy::Reference(class) => {
            let class = crate::util::ident(class);
            quote!(Option<Box<#class>>)
        }
        FieldTy::Collection(class) => {
            let class = crate::util::ident(class);
            quote!(Vec<#class>)
        }
    }
}
