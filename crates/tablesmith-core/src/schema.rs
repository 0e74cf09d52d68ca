//! Raw schema metadata as reported by a [`SchemaReader`].
//!
//! Everything in this module is transient: descriptors are produced fresh for
//! each table build and discarded once folded into a
//! [`ClassMetadata`](crate::model::ClassMetadata).

mod child;
pub use child::ChildReference;

mod column;
pub use column::{ColumnDescriptor, ConstraintRole, ForeignKey};

mod reader;
pub use reader::SchemaReader;
