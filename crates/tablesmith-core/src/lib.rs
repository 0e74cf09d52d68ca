//! Schema introspection to class-metadata mapping.
//!
//! A [`SchemaReader`] reports tables, columns, key constraints and child
//! references of a live database. The [`builder`] folds them into one
//! [`ClassMetadata`] per table: primary keys become identifiers, foreign keys
//! become references to the parent class, and every child table contributes a
//! to-one or to-many field depending on whether its referencing column is
//! unique. The [`Generator`] runs this for every table and hands the result
//! to an [`Emit`] implementation.

pub mod builder;

mod error;
pub use error::{Error, IntoError};

pub mod generate;
pub use generate::{ArtifactKind, Emit, Generator};

pub mod model;
pub use model::ClassMetadata;

pub mod name;

pub mod relation;

pub mod schema;
pub use schema::SchemaReader;

pub mod ty;
pub use ty::ScalarType;

/// A Result type alias that uses Tablesmith's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
