use crate::{
    model::Cardinality,
    schema::{ChildReference, SchemaReader},
    Error, Result,
};

use indexmap::IndexMap;

/// Children of one table keyed by child table name, in the order the schema
/// reader reported them.
pub type Children = IndexMap<String, ChildRelation>;

/// How one child table references its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRelation {
    /// Referencing column in the child table
    pub column: String,

    /// `One` when the referencing column is unique, `Many` otherwise
    pub cardinality: Cardinality,
}

/// Finds every table whose foreign key references `table` and infers the
/// cardinality of each relationship from the uniqueness of the referencing
/// column.
pub async fn resolve_children(reader: &dyn SchemaReader, table: &str) -> Result<Children> {
    let references = reader.find_children(table).await?;
    fold_children(table, references)
}

/// Folds raw child references into the per-child cardinality map.
///
/// A child that references the parent through more than one column would
/// produce two fields with the same name on the parent; that is reported
/// instead of silently keeping one of them.
pub fn fold_children(table: &str, references: Vec<ChildReference>) -> Result<Children> {
    let mut children = Children::with_capacity(references.len());

    for reference in references {
        if let Some(previous) = children.get(&reference.table) {
            return Err(Error::malformed_constraint(
                &reference.table,
                Some(&reference.column),
                format!(
                    "references `{table}` through both `{}` and `{}`",
                    previous.column, reference.column
                ),
            ));
        }

        let cardinality = if reference.unique {
            Cardinality::One
        } else {
            Cardinality::Many
        };

        children.insert(
            reference.table,
            ChildRelation {
                column: reference.column,
                cardinality,
            },
        );
    }

    Ok(children)
}
