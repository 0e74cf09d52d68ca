use super::Expand;

use tablesmith_core::Result;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_repository(&self) -> Result<TokenStream> {
        let root = &self.root;
        let record = &self.names.record;
        let repository = &self.names.repository;
        let id_ty = self.identifier_ty()?;

        let doc = format!(" Data access for [`{record}`] records.");

        Ok(quote! {
            use #root::record::#record;
            use #root::support::Result;

            #[doc = #doc]
            #[async_trait::async_trait]
            pub trait #repository: Send + Sync {
                async fn find_all(&self) -> Result<Vec<#record>>;

                async fn find_by_id(&self, id: #id_ty) -> Result<Option<#record>>;

                async fn exists_by_id(&self, id: #id_ty) -> Result<bool> {
                    Ok(self.find_by_id(id).await?.is_some())
                }

                /// Inserts or updates the record, returning it as stored.
                async fn save(&self, entity: #record) -> Result<#record>;

                async fn delete_by_id(&self, id: #id_ty) -> Result<()>;
            }
        })
    }
}
