use crate::names::ClassNames;

use tablesmith_core::{generate::ArtifactKind, model::ClassMetadata};

use proc_macro2::TokenStream;
use quote::quote;

/// The `mod.rs` of one artifact directory: declares each class's module and
/// re-exports its public items.
pub(crate) fn expand_module_index(kind: ArtifactKind, classes: &[ClassMetadata]) -> TokenStream {
    let modules = classes.iter().map(|class| {
        let names = ClassNames::new(class);

        match kind {
            ArtifactKind::Record => {
                let module = &names.record_module;
                let record = &names.record;
                quote! {
                    mod #module;
                    pub use #module::#record;
                }
            }
            ArtifactKind::Repository => {
                let module = &names.repository_module;
                let repository = &names.repository;
                quote! {
                    mod #module;
                    pub use #module::#repository;
                }
            }
            ArtifactKind::Service => {
                let module = &names.service_module;
                let service = &names.service;
                quote! {
                    mod #module;
                    pub use #module::#service;
                }
            }
            ArtifactKind::Api => {
                let module = &names.api_module;
                quote!(pub mod #module;)
            }
        }
    });

    quote!( #( #modules )* )
}

/// The root `mod.rs` of the output directory.
pub(crate) fn expand_root_module() -> TokenStream {
    quote! {
        pub mod api;
        pub mod record;
        pub mod repository;
        pub mod service;
        pub mod support;
    }
}
