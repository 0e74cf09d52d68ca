use crate::util::ident;

use tablesmith_core::{model::ClassMetadata, name::PLURAL_SUFFIX};

use std_util::str;

/// Identifiers and paths shared by every artifact generated for a class.
#[derive(Debug)]
pub(crate) struct ClassNames {
    /// Record struct, `OrderItem`
    pub(crate) record: syn::Ident,

    /// `order_item`
    pub(crate) record_module: syn::Ident,

    /// `OrderItemRepository`
    pub(crate) repository: syn::Ident,

    /// `order_item_repository`
    pub(crate) repository_module: syn::Ident,

    /// `OrderItemService`
    pub(crate) service: syn::Ident,

    /// `order_item_service`
    pub(crate) service_module: syn::Ident,

    /// `order_item_api`
    pub(crate) api_module: syn::Ident,

    /// Collection route, `/orderitems`
    pub(crate) route: String,
}

impl ClassNames {
    pub(crate) fn new(class: &ClassMetadata) -> ClassNames {
        let snake = str::snake_case(&class.name);

        ClassNames {
            record: ident(&class.name),
            record_module: ident(&snake),
            repository: ident!("{}Repository", class.name),
            repository_module: ident!("{snake}_repository"),
            service: ident!("{}Service", class.name),
            service_module: ident!("{snake}_service"),
            api_module: ident!("{snake}_api"),
            route: format!("/{}{PLURAL_SUFFIX}", class.name.to_lowercase()),
        }
    }
}

/// Rust field identifier for a camelCase field name.
pub(crate) fn field_ident(name: &str) -> syn::Ident {
    ident(&str::snake_case(name))
}

/// File stem of a module identifier; raw identifiers map to their bare name.
pub(crate) fn file_stem(module: &syn::Ident) -> String {
    let name = module.to_string();
    name.strip_prefix("r#").map(String::from).unwrap_or(name)
}
