use super::{ChildReference, ColumnDescriptor};
use crate::{async_trait, Result};

use std::fmt::Debug;

/// Read-only access to the catalog of a live database.
///
/// Implementations issue introspection queries against a connection owned by
/// the caller. Every method must tolerate zero rows: a table with no foreign
/// keys or a leaf table with no children is not an error. Any connection or
/// query failure is reported as [`Error::schema_access`](crate::Error::schema_access).
#[async_trait]
pub trait SchemaReader: Debug + Send + Sync {
    /// All base tables of the active schema, in enumeration order.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns of `table` in column-definition order.
    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Foreign keys in other tables whose target is `table`.
    async fn find_children(&self, table: &str) -> Result<Vec<ChildReference>>;
}

#[async_trait]
impl<T: SchemaReader + ?Sized> SchemaReader for &T {
    async fn list_tables(&self) -> Result<Vec<String>> {
        (**self).list_tables().await
    }

    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        (**self).read_columns(table).await
    }

    async fn find_children(&self, table: &str) -> Result<Vec<ChildReference>> {
        (**self).find_children(table).await
    }
}

#[async_trait]
impl<T: SchemaReader + ?Sized> SchemaReader for Box<T> {
    async fn list_tables(&self) -> Result<Vec<String>> {
        (**self).list_tables().await
    }

    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        (**self).read_columns(table).await
    }

    async fn find_children(&self, table: &str) -> Result<Vec<ChildReference>> {
        (**self).find_children(table).await
    }
}
