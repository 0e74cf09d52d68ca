use super::Expand;
use crate::names::field_ident;

use tablesmith_core::Result;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_service(&self) -> Result<TokenStream> {
        let root = &self.root;
        let record = &self.names.record;
        let repository = &self.names.repository;
        let service = &self.names.service;
        let id = field_ident(&self.identifier()?.name);
        let id_ty = self.identifier_ty()?;
        let entity_name = self.class.name.as_str();

        let doc = format!(" Business operations on [`{record}`] records.");

        Ok(quote! {
            use #root::record::#record;
            use #root::repository::#repository;
            use #root::support::{self, Error, Result};

            #[doc = #doc]
            #[derive(Debug)]
            pub struct #service<R> {
                repository: R,
            }

            impl<R: #repository> #service<R> {
                pub fn new(repository: R) -> Self {
                    Self { repository }
                }

                pub fn repository(&self) -> &R {
                    &self.repository
                }

                pub async fn find_all(&self) -> Result<Vec<#record>> {
                    self.repository.find_all().await
                }

                pub async fn find_by_id(&self, id: #id_ty) -> Result<#record> {
                    match self.repository.find_by_id(id.clone()).await? {
                        Some(entity) => Ok(entity),
                        None => Err(Error::not_found(#entity_name, id)),
                    }
                }

                pub async fn save(&self, entity: #record) -> Result<#record> {
                    self.repository.save(entity).await
                }

                /// Replaces the record stored under `id`.
                pub async fn update(&self, id: #id_ty, mut entity: #record) -> Result<#record> {
                    if !self.repository.exists_by_id(id.clone()).await? {
                        return Err(Error::not_found(#entity_name, id));
                    }

                    entity.#id = Some(id);
                    self.repository.save(entity).await
                }

                /// Applies a JSON merge patch to the record stored under `id`.
                pub async fn partial_update(
                    &self,
                    id: #id_ty,
                    patch: serde_json::Value,
                ) -> Result<#record> {
                    let existing = self.find_by_id(id.clone()).await?;
                    let mut entity: #record = support::merge_patch(&existing, &patch)?;

                    entity.#id = Some(id);
                    self.repository.save(entity).await
                }

                pub async fn delete_by_id(&self, id: #id_ty) -> Result<()> {
                    self.repository.delete_by_id(id).await
                }
            }
        })
    }
}
