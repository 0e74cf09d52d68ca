use tablesmith_core::{
    schema::{ColumnDescriptor, ConstraintRole, ForeignKey},
    Error, Result,
};
use tokio_postgres::Row;

/// One decoded row of the column query.
///
/// A column appears once per constraint it participates in, so several rows
/// may share an ordinal position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnRow {
    pub(crate) ordinal: i32,
    pub(crate) name: String,
    pub(crate) data_type: String,
    pub(crate) is_nullable: String,
    pub(crate) max_length: Option<i32>,
    pub(crate) constraint_type: Option<String>,
    pub(crate) referenced_table: Option<String>,
    pub(crate) referenced_column: Option<String>,
    pub(crate) is_unique: bool,
}

impl ColumnRow {
    pub(crate) fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            ordinal: row.try_get("ordinal_position")?,
            name: row.try_get("column_name")?,
            data_type: row.try_get("data_type")?,
            is_nullable: row.try_get("is_nullable")?,
            max_length: row.try_get("character_maximum_length")?,
            constraint_type: row.try_get("constraint_type")?,
            referenced_table: row.try_get("referenced_table")?,
            referenced_column: row.try_get("referenced_column")?,
            is_unique: row.try_get("is_unique")?,
        })
    }

    /// Key role contributed by this row alone. `UNIQUE` and `CHECK`
    /// constraints do not affect the role.
    fn role(&self) -> ConstraintRole {
        match self.constraint_type.as_deref() {
            Some("PRIMARY KEY") => ConstraintRole::PrimaryKey,
            Some("FOREIGN KEY") => ConstraintRole::ForeignKey(ForeignKey {
                table: self.referenced_table.clone(),
                column: self.referenced_column.clone(),
            }),
            _ => ConstraintRole::None,
        }
    }

    fn into_descriptor(self) -> ColumnDescriptor {
        let role = self.role();

        ColumnDescriptor {
            nullable: self.is_nullable.eq_ignore_ascii_case("YES"),
            max_length: self.max_length.and_then(|len| u32::try_from(len).ok()),
            unique: self.is_unique,
            role,
            name: self.name,
            db_type: self.data_type,
        }
    }
}

/// Folds the rows of the column query into one descriptor per column, in
/// ordinal order.
///
/// When a column has several rows, the primary key role wins over a foreign
/// key, and a foreign key wins over no role.
pub(crate) fn fold_column_rows(table: &str, rows: Vec<ColumnRow>) -> Result<Vec<ColumnDescriptor>> {
    let mut columns: Vec<(i32, ColumnDescriptor)> = Vec::with_capacity(rows.len());

    for row in rows {
        match columns.iter().position(|(ordinal, _)| *ordinal == row.ordinal) {
            Some(index) => {
                let column = &mut columns[index].1;
                column.role = merge_role(table, &column.name, &column.role, row.role())?;
            }
            None => columns.push((row.ordinal, row.into_descriptor())),
        }
    }

    columns.sort_by_key(|(ordinal, _)| *ordinal);

    Ok(columns.into_iter().map(|(_, column)| column).collect())
}

fn merge_role(
    table: &str,
    column: &str,
    current: &ConstraintRole,
    next: ConstraintRole,
) -> Result<ConstraintRole> {
    Ok(match (current, next) {
        (ConstraintRole::PrimaryKey, _) | (_, ConstraintRole::PrimaryKey) => {
            ConstraintRole::PrimaryKey
        }
        // A multi-column key yields one row per referenced column.
        (ConstraintRole::ForeignKey(a), ConstraintRole::ForeignKey(b))
            if a.table == b.table && a.column != b.column =>
        {
            return Err(Error::malformed_constraint(
                table,
                Some(column),
                format!(
                    "composite foreign keys are not supported (`{}` via `{}`, `{}`)",
                    a.table.as_deref().unwrap_or("?"),
                    a.column.as_deref().unwrap_or("?"),
                    b.column.as_deref().unwrap_or("?")
                ),
            ));
        }
        (ConstraintRole::ForeignKey(a), ConstraintRole::ForeignKey(b)) if *a != b => {
            return Err(Error::malformed_constraint(
                table,
                Some(column),
                format!(
                    "column has foreign keys to both `{}` and `{}`",
                    a.table.as_deref().unwrap_or("?"),
                    b.table.as_deref().unwrap_or("?")
                ),
            ));
        }
        (ConstraintRole::ForeignKey(a), _) => ConstraintRole::ForeignKey(a.clone()),
        (ConstraintRole::None, next) => next,
    })
}
