//! Rust source emitters for the four artifact kinds.
//!
//! [`Output`] implements [`Emit`](tablesmith_core::generate::Emit): hand it to
//! [`Generator::run`](tablesmith_core::generate::Generator::run) and it
//! collects one token stream per artifact, plus the module indexes and the
//! shared `support` module when the run finishes.

#[macro_use]
mod util;

mod expand;

mod names;

mod out;
pub use out::{FileOutput, Output};

use tablesmith_core::{generate::ArtifactKind, model::ClassMetadata, Result};

use proc_macro2::TokenStream;

/// Expands a single artifact for a class without collecting it.
pub fn expand(kind: ArtifactKind, class: &ClassMetadata) -> Result<TokenStream> {
    expand::artifact(kind, class)
}
