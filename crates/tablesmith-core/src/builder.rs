use crate::{
    model::{
        Cardinality, ClassMetadata, ColumnMapping, FieldMapping, FieldMetadata, FieldRole,
        FieldTy, MappedBy,
    },
    name,
    relation::{self, ChildRelation, Children},
    schema::{ColumnDescriptor, ConstraintRole, SchemaReader},
    ty, Error, Result,
};

use std::collections::HashMap;

/// Builds the [`ClassMetadata`] of `table` from the live schema.
///
/// Runs the column scan and the child scan, then merges both into one
/// class. Any error is fatal for the table and names the table (and column,
/// when one is involved).
pub async fn build_class(reader: &dyn SchemaReader, table: &str) -> Result<ClassMetadata> {
    tracing::debug!(table, "scanning columns");
    let columns = reader
        .read_columns(table)
        .await
        .map_err(|e| e.context(crate::err!("building metadata for table `{table}`")))?;

    tracing::debug!(table, "scanning children");
    let children = relation::resolve_children(reader, table)
        .await
        .map_err(|e| e.context(crate::err!("building metadata for table `{table}`")))?;

    build_from_parts(table, columns, children)
}

/// Folds one table's column and child descriptors into a class.
///
/// This is the pure half of [`build_class`]: it performs no I/O and its
/// output depends only on its input.
pub fn build_from_parts(
    table: &str,
    columns: Vec<ColumnDescriptor>,
    children: Children,
) -> Result<ClassMetadata> {
    if columns.is_empty() {
        return Err(Error::malformed_table(table, "table has no columns"));
    }

    let mut fields = Vec::with_capacity(columns.len() + children.len());

    for column in &columns {
        fields.push(column_field(table, column)?);
    }

    for (child, relation) in &children {
        fields.push(relationship_field(table, child, relation));
    }

    verify_identifier(table, &columns)?;
    verify_unique_names(table, &fields)?;

    let class = ClassMetadata::entity(name::class_name(table), table, fields);

    for field in class.unmapped_fields() {
        tracing::warn!(
            table,
            field = %field.name,
            db_type = field.column().map(|c| &c.db_type[..]).unwrap_or_default(),
            "unrecognized column type; generating an opaque field"
        );
    }

    Ok(class)
}

/// Produces the identifier, scalar or inbound reference field for one column.
fn column_field(table: &str, column: &ColumnDescriptor) -> Result<FieldMetadata> {
    let mut mapping = ColumnMapping {
        column: column.name.clone(),
        db_type: column.db_type.clone(),
        nullable: column.nullable,
        max_length: column.max_length,
        unique: column.unique,
        references: None,
    };

    let (name, ty, role) = match &column.role {
        ConstraintRole::PrimaryKey => (
            name::ID_FIELD.to_string(),
            FieldTy::Scalar(ty::map_scalar_type(&column.db_type)),
            FieldRole::Identifier,
        ),
        ConstraintRole::ForeignKey(fk) => {
            let Some(referenced_table) = fk.table.as_deref().filter(|t| !t.trim().is_empty())
            else {
                return Err(Error::malformed_constraint(
                    table,
                    Some(&column.name),
                    "foreign key has no referenced table",
                ));
            };

            let Some(referenced_column) = fk.column.as_deref().filter(|c| !c.trim().is_empty())
            else {
                return Err(Error::malformed_constraint(
                    table,
                    Some(&column.name),
                    format!("foreign key to `{referenced_table}` has no referenced column"),
                ));
            };

            mapping.references = Some(referenced_column.to_string());

            (
                name::field_name(&column.name, Some(referenced_table)),
                FieldTy::Reference(name::class_name(referenced_table)),
                FieldRole::ToOneInbound,
            )
        }
        ConstraintRole::None => (
            name::field_name(&column.name, None),
            FieldTy::Scalar(ty::map_scalar_type(&column.db_type)),
            FieldRole::Scalar,
        ),
    };

    Ok(FieldMetadata {
        name,
        ty,
        role,
        mapping: FieldMapping::Column(mapping),
    })
}

/// Synthesizes the field a child relationship contributes to its parent.
fn relationship_field(parent: &str, child: &str, relation: &ChildRelation) -> FieldMetadata {
    let class = name::class_name(child);

    let (name, ty, role) = match relation.cardinality {
        Cardinality::One => (
            name::singular_field_name(child),
            FieldTy::Reference(class),
            FieldRole::ToOneOutbound,
        ),
        Cardinality::Many => (
            name::plural_field_name(child),
            FieldTy::Collection(class),
            FieldRole::ToManyOutbound,
        ),
    };

    FieldMetadata {
        name,
        ty,
        role,
        mapping: FieldMapping::MappedBy(MappedBy {
            table: child.to_string(),
            column: relation.column.clone(),
            // The inbound field on the child is named after the parent table.
            field: name::field_name(parent, None),
        }),
    }
}

fn verify_identifier(table: &str, columns: &[ColumnDescriptor]) -> Result<()> {
    let mut primary_keys = columns.iter().filter(|column| column.is_primary_key());

    match (primary_keys.next(), primary_keys.next()) {
        (Some(_), None) => Ok(()),
        (None, _) => Err(Error::malformed_table(table, "table has no primary key")),
        (Some(first), Some(second)) => Err(Error::malformed_table(
            table,
            format!(
                "composite primary keys are not supported (`{}`, `{}`)",
                first.name, second.name
            ),
        )),
    }
}

/// Rejects classes in which two fields share a name, e.g. two foreign keys
/// to the same table or a column named like a synthesized relationship.
fn verify_unique_names(table: &str, fields: &[FieldMetadata]) -> Result<()> {
    let mut seen = HashMap::<&str, &FieldMetadata>::with_capacity(fields.len());

    for field in fields {
        if let Some(previous) = seen.insert(&field.name, field) {
            return Err(Error::malformed_constraint(
                table,
                source_column(field).or_else(|| source_column(previous)),
                format!(
                    "field `{}` is produced by both {} and {}",
                    field.name,
                    describe_source(previous),
                    describe_source(field)
                ),
            ));
        }
    }

    Ok(())
}

fn source_column(field: &FieldMetadata) -> Option<&str> {
    field.column().map(|column| &column.column[..])
}

fn describe_source(field: &FieldMetadata) -> String {
    match &field.mapping {
        FieldMapping::Column(column) => format!("column `{}`", column.column),
        FieldMapping::MappedBy(mapped_by) => format!(
            "child `{}.{}`",
            mapped_by.table, mapped_by.column
        ),
    }
}
