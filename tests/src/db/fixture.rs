use crate::{SchemaDef, Setup};

use tablesmith_core::{
    async_trait,
    schema::{ChildReference, ColumnDescriptor, ConstraintRole, ForeignKey, SchemaReader},
    Error, Result,
};

/// Runs scenarios against an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct SetupFixture;

impl SetupFixture {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Setup for SetupFixture {
    type Reader = FixtureReader;

    async fn reader(&self, schema: &SchemaDef) -> Result<FixtureReader> {
        Ok(FixtureReader::new(schema.clone()))
    }

    async fn cleanup(&self) -> Result<()> {
        Ok(())
    }
}

/// A [`SchemaReader`] answering from a [`SchemaDef`], ordered the same way
/// the catalog queries order their rows.
#[derive(Debug, Clone)]
pub struct FixtureReader {
    schema: SchemaDef,

    /// Table whose column read fails, to exercise error propagation
    fail_on: Option<String>,
}

impl FixtureReader {
    pub fn new(schema: SchemaDef) -> Self {
        Self {
            schema,
            fail_on: None,
        }
    }

    /// Makes `read_columns` fail for `table` with a schema-access error.
    pub fn failing_on(mut self, table: impl Into<String>) -> Self {
        self.fail_on = Some(table.into());
        self
    }

    fn sorted_tables(&self) -> Vec<&crate::TableDef> {
        let mut tables: Vec<_> = self.schema.tables().iter().collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables
    }
}

#[async_trait]
impl SchemaReader for FixtureReader {
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self
            .sorted_tables()
            .into_iter()
            .map(|table| table.name.clone())
            .collect())
    }

    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        if self.fail_on.as_deref() == Some(table) {
            return Err(Error::schema_access(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }

        let Some(table) = self.schema.get(table) else {
            return Ok(vec![]);
        };

        Ok(table
            .columns
            .iter()
            .map(|column| {
                let role = if column.primary_key {
                    ConstraintRole::PrimaryKey
                } else if let Some((target, target_column)) = &column.references {
                    ConstraintRole::ForeignKey(ForeignKey::new(target, target_column))
                } else {
                    ConstraintRole::None
                };

                ColumnDescriptor {
                    name: column.name.clone(),
                    db_type: column.db_type.clone(),
                    nullable: column.nullable,
                    max_length: column.max_length,
                    role,
                    unique: column.unique,
                }
            })
            .collect())
    }

    async fn find_children(&self, table: &str) -> Result<Vec<ChildReference>> {
        let mut children = vec![];

        for child in self.sorted_tables() {
            let mut columns: Vec<_> = child
                .columns
                .iter()
                .filter(|column| matches!(&column.references, Some((target, _)) if target == table))
                .collect();
            columns.sort_by(|a, b| a.name.cmp(&b.name));

            children.extend(columns.into_iter().map(|column| ChildReference {
                table: child.name.clone(),
                column: column.name.clone(),
                unique: column.unique,
            }));
        }

        Ok(children)
    }
}
