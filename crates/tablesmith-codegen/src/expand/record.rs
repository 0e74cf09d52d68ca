use super::{field_ty, Expand};
use crate::names::field_ident;
use crate::util::ident;

use tablesmith_core::model::{FieldMapping, FieldMetadata, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record(&self) -> TokenStream {
        let record = &self.names.record;
        let imports = self.expand_record_imports();
        let fields = self.class.fields.iter().map(expand_record_field);
        let consts = self.expand_record_consts();

        let derive = if self.class.no_args_constructor {
            quote!(#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)])
        } else {
            quote!(#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)])
        };

        let doc = match self.class.table_name() {
            Some(table) => format!(" Record of table `{table}`."),
            None => format!(" `{}` record.", self.class.name),
        };

        quote! {
            #imports

            #[doc = #doc]
            #derive
            #[serde(rename_all = "camelCase")]
            pub struct #record {
                #( #fields, )*
            }

            #consts
        }
    }

    /// Sibling records named by relationship fields.
    fn expand_record_imports(&self) -> TokenStream {
        let mut classes: Vec<&str> = vec![];

        for field in &self.class.fields {
            if let Some(class) = field.ty.target_class() {
                if class != self.class.name && !classes.contains(&class) {
                    classes.push(class);
                }
            }
        }

        if classes.is_empty() {
            return quote!();
        }

        let classes = classes.into_iter().map(ident);
        quote!(use super::{ #( #classes ),* };)
    }

    fn expand_record_consts(&self) -> TokenStream {
        let Some(table) = self.class.table_name() else {
            return quote!();
        };

        let record = &self.names.record;
        let columns = self
            .class
            .fields
            .iter()
            .filter_map(|field| field.column())
            .map(|column| &column.column);

        quote! {
            impl #record {
                pub const TABLE_NAME: &'static str = #table;

                /// Backing columns, in table order.
                pub const COLUMNS: &'static [&'static str] = &[ #( #columns ),* ];
            }
        }
    }
}

fn expand_record_field(field: &FieldMetadata) -> TokenStream {
    let name = field_ident(&field.name);
    let ty = field_ty(field);
    let doc = field_doc(field);

    let serde = match &field.ty {
        FieldTy::Scalar(_) => quote!(),
        FieldTy::Reference(_) => {
            quote!(#[serde(default, skip_serializing_if = "Option::is_none")])
        }
        FieldTy::Collection(_) => {
            quote!(#[serde(default, skip_serializing_if = "Vec::is_empty")])
        }
    };

    quote! {
        #[doc = #doc]
        #serde
        pub #name: #ty
    }
}

fn field_doc(field: &FieldMetadata) -> String {
    match &field.mapping {
        FieldMapping::Column(column) => {
            let mut doc = format!(" Column `{}` ({})", column.column, column.db_type);

            if field.is_identifier() {
                doc.push_str(", primary key");
            }

            if let Some(references) = &column.references {
                let target = field.ty.target_class().unwrap_or_default();
                doc.push_str(&format!(", references `{target}.{references}`"));
            }

            if field.is_unmapped() {
                doc.push_str(", unmapped type");
            }

            doc
        }
        FieldMapping::MappedBy(mapped_by) => format!(
            " Mapped by `{}.{}` through column `{}`",
            mapped_by.table, mapped_by.field, mapped_by.column
        ),
    }
}
