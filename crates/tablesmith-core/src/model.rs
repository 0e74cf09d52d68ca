//! The class-metadata model handed to emitters.
//!
//! A [`ClassMetadata`] is built once per table per run and never mutated
//! afterwards. It is self-contained: other classes are referred to only by
//! their derived class names.

mod class;
pub use class::{ClassMetadata, EntityMapping};

mod field;
pub use field::{
    Cardinality, ColumnMapping, FieldMapping, FieldMetadata, FieldRole, FieldTy, MappedBy,
};
