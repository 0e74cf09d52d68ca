use proc_macro2::TokenStream;
use quote::quote;

/// The run-wide `support` module shared by every generated service and API.
pub(crate) fn expand_support() -> TokenStream {
    quote! {
        use axum::{
            http::StatusCode,
            response::{IntoResponse, Response},
            Json,
        };
        use serde::{de::DeserializeOwned, Serialize};
        use serde_json::Value;

        pub type Result<T, E = Error> = std::result::Result<T, E>;

        #[derive(Debug, thiserror::Error)]
        pub enum Error {
            #[error("{entity} not found with id: {id}")]
            NotFound { entity: &'static str, id: String },

            #[error("repository error: {0}")]
            Repository(#[source] Box<dyn std::error::Error + Send + Sync>),

            #[error("invalid patch: {0}")]
            Patch(#[from] serde_json::Error),
        }

        impl Error {
            pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Error {
                Error::NotFound {
                    entity,
                    id: id.to_string(),
                }
            }

            pub fn repository(err: impl std::error::Error + Send + Sync + 'static) -> Error {
                Error::Repository(Box::new(err))
            }
        }

        impl IntoResponse for Error {
            fn into_response(self) -> Response {
                let status = match &self {
                    Error::NotFound { .. } => StatusCode::NOT_FOUND,
                    Error::Patch(_) => StatusCode::BAD_REQUEST,
                    Error::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };

                (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
            }
        }

        /// Applies a JSON merge patch (RFC 7386) to `entity`.
        pub fn merge_patch<T>(entity: &T, patch: &Value) -> Result<T>
        where
            T: Serialize + DeserializeOwned,
        {
            let mut document = serde_json::to_value(entity)?;
            merge(&mut document, patch);
            Ok(serde_json::from_value(document)?)
        }

        fn merge(target: &mut Value, patch: &Value) {
            let Value::Object(patch) = patch else {
                *target = patch.clone();
                return;
            };

            if !target.is_object() {
                *target = Value::Object(Default::default());
            }

            if let Value::Object(target) = target {
                for (key, value) in patch {
                    if value.is_null() {
                        target.remove(key);
                    } else {
                        merge(target.entry(key.clone()).or_insert(Value::Null), value);
                    }
                }
            }
        }
    }
}
