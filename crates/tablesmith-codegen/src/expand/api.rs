use super::Expand;

use tablesmith_core::Result;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_api(&self) -> Result<TokenStream> {
        let root = &self.root;
        let record = &self.names.record;
        let repository = &self.names.repository;
        let service = &self.names.service;
        let id_ty = self.identifier_ty()?;

        let route = &self.names.route;
        let item_route = format!("{route}/{{id}}");
        let doc = format!(" HTTP routes for [`{record}`] records, mounted at `{route}`.");

        Ok(quote! {
            use #root::record::#record;
            use #root::repository::#repository;
            use #root::service::#service;
            use #root::support::Result;

            use axum::{
                extract::{Path, State},
                http::StatusCode,
                routing::get,
                Json, Router,
            };
            use std::sync::Arc;

            pub const PATH: &str = #route;

            #[doc = #doc]
            pub fn router<R: #repository + 'static>(service: Arc<#service<R>>) -> Router {
                Router::new()
                    .route(#route, get(get_all::<R>).post(create::<R>))
                    .route(
                        #item_route,
                        get(get_by_id::<R>)
                            .put(replace::<R>)
                            .patch(patch::<R>)
                            .delete(delete::<R>),
                    )
                    .with_state(service)
            }

            async fn get_all<R: #repository>(
                State(service): State<Arc<#service<R>>>,
            ) -> Result<Json<Vec<#record>>> {
                Ok(Json(service.find_all().await?))
            }

            async fn get_by_id<R: #repository>(
                State(service): State<Arc<#service<R>>>,
                Path(id): Path<#id_ty>,
            ) -> Result<Json<#record>> {
                Ok(Json(service.find_by_id(id).await?))
            }

            async fn create<R: #repository>(
                State(service): State<Arc<#service<R>>>,
                Json(entity): Json<#record>,
            ) -> Result<(StatusCode, Json<#record>)> {
                Ok((StatusCode::CREATED, Json(service.save(entity).await?)))
            }

            async fn replace<R: #repository>(
                State(service): State<Arc<#service<R>>>,
                Path(id): Path<#id_ty>,
                Json(entity): Json<#record>,
            ) -> Result<StatusCode> {
                service.update(id, entity).await?;
                Ok(StatusCode::NO_CONTENT)
            }

            async fn patch<R: #repository>(
                State(service): State<Arc<#service<R>>>,
                Path(id): Path<#id_ty>,
                Json(patch): Json<serde_json::Value>,
            ) -> Result<StatusCode> {
                service.partial_update(id, patch).await?;
                Ok(StatusCode::NO_CONTENT)
            }

            async fn delete<R: #repository>(
                State(service): State<Arc<#service<R>>>,
                Path(id): Path<#id_ty>,
            ) -> Result<StatusCode> {
                service.delete_by_id(id).await?;
                Ok(StatusCode::NO_CONTENT)
            }
        })
    }
}
