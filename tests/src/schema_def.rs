/// Synthetic schema a scenario runs against.
#[derive(Debug, Clone, Default)]
pub struct SchemaDef {
    tables: Vec<TableDef>,

    /// Enum types as `(name, labels)`, created before any table
    enums: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,

    /// Type name as the catalog reports it, e.g. `character varying`
    pub db_type: String,

    pub nullable: bool,
    pub max_length: Option<u32>,
    pub primary_key: bool,

    /// Referenced `(table, column)` for foreign keys
    pub references: Option<(String, String)>,

    /// Covered by a single-column unique index
    pub unique: bool,
}

impl SchemaDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }

    /// Declares an enum type. Columns use it by its bare name.
    pub fn enum_type(mut self, name: &str, labels: &[&str]) -> Self {
        let labels = labels.iter().map(|label| label.to_string()).collect();
        self.enums.push((name.to_string(), labels));
        self
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn get(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Statements creating the schema's tables inside `schema`.
    ///
    /// Enum types are created first, then tables, then foreign keys and
    /// unique indexes, so definition order does not matter.
    pub fn ddl(&self, schema: &str) -> Vec<String> {
        let mut statements = vec![];

        for (name, labels) in &self.enums {
            let labels: Vec<_> = labels
                .iter()
                .map(|label| format!("'{}'", label.replace('\'', "''")))
                .collect();

            statements.push(format!(
                "CREATE TYPE {}.{} AS ENUM ({})",
                quote(schema),
                quote(name),
                labels.join(", ")
            ));
        }

        for table in &self.tables {
            let columns: Vec<_> = table
                .columns
                .iter()
                .map(|column| column.ddl(schema, &self.enums))
                .collect();
            let primary_key: Vec<_> = table
                .columns
                .iter()
                .filter(|column| column.primary_key)
                .map(|column| quote(&column.name))
                .collect();

            let mut body = columns;
            if !primary_key.is_empty() {
                body.push(format!("PRIMARY KEY ({})", primary_key.join(", ")));
            }

            statements.push(format!(
                "CREATE TABLE {}.{} ({})",
                quote(schema),
                quote(&table.name),
                body.join(", ")
            ));
        }

        for table in &self.tables {
            for column in &table.columns {
                if let Some((target, target_column)) = &column.references {
                    statements.push(format!(
                        "ALTER TABLE {}.{} ADD FOREIGN KEY ({}) REFERENCES {}.{} ({})",
                        quote(schema),
                        quote(&table.name),
                        quote(&column.name),
                        quote(schema),
                        quote(target),
                        quote(target_column)
                    ));
                }

                if column.unique && !column.primary_key {
                    statements.push(format!(
                        "CREATE UNIQUE INDEX ON {}.{} ({})",
                        quote(schema),
                        quote(&table.name),
                        quote(&column.name)
                    ));
                }
            }
        }

        statements
    }
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    /// Adds a non-null primary-key column.
    pub fn pk(self, name: &str, db_type: &str) -> Self {
        self.push(ColumnDef {
            primary_key: true,
            nullable: false,
            unique: true,
            ..ColumnDef::new(name, db_type)
        })
    }

    /// Adds a nullable column.
    pub fn column(self, name: &str, db_type: &str) -> Self {
        self.push(ColumnDef::new(name, db_type))
    }

    /// Adds a `NOT NULL` column.
    pub fn required(self, name: &str, db_type: &str) -> Self {
        self.push(ColumnDef {
            nullable: false,
            ..ColumnDef::new(name, db_type)
        })
    }

    /// Adds a nullable `character varying(len)` column.
    pub fn varchar(self, name: &str, len: u32) -> Self {
        self.push(ColumnDef {
            max_length: Some(len),
            ..ColumnDef::new(name, "character varying")
        })
    }

    /// Adds a nullable foreign-key column referencing `table.column`.
    pub fn fk(self, name: &str, db_type: &str, table: &str, column: &str) -> Self {
        self.push(ColumnDef {
            references: Some((table.to_string(), column.to_string())),
            ..ColumnDef::new(name, db_type)
        })
    }

    /// Makes an existing column a foreign key referencing `table.column`.
    pub fn references(mut self, name: &str, table: &str, column: &str) -> Self {
        let references = Some((table.to_string(), column.to_string()));

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(c) => c.references = references,
            None => panic!("no column `{name}` in table `{}`", self.name),
        }
        self
    }

    /// Marks an existing column as covered by a unique index.
    pub fn unique(mut self, name: &str) -> Self {
        match self.columns.iter_mut().find(|column| column.name == name) {
            Some(column) => column.unique = true,
            None => panic!("no column `{name}` in table `{}`", self.name),
        }
        self
    }

    fn push(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }
}

impl ColumnDef {
    fn new(name: &str, db_type: &str) -> Self {
        Self {
            name: name.to_string(),
            db_type: db_type.to_string(),
            nullable: true,
            max_length: None,
            primary_key: false,
            references: None,
            unique: false,
        }
    }

    fn ddl(&self, schema: &str, enums: &[(String, Vec<String>)]) -> String {
        let db_type = if enums.iter().any(|(name, _)| *name == self.db_type) {
            format!("{}.{}", quote(schema), quote(&self.db_type))
        } else {
            self.db_type.clone()
        };

        let mut ddl = format!("{} {}", quote(&self.name), db_type);

        if let Some(len) = self.max_length {
            ddl.push_str(&format!("({len})"));
        }

        if !self.nullable {
            ddl.push_str(" NOT NULL");
        }

        ddl
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_orders_tables_before_constraints() {
        let schema = SchemaDef::new()
            .table(
                TableDef::new("order")
                    .pk("id", "integer")
                    .fk("user_id", "integer", "user", "id")
                    .unique("user_id"),
            )
            .table(TableDef::new("user").pk("id", "integer").varchar("name", 40));

        assert_eq!(
            schema.ddl("s"),
            [
                r#"CREATE TABLE "s"."order" ("id" integer NOT NULL, "user_id" integer, PRIMARY KEY ("id"))"#,
                r#"CREATE TABLE "s"."user" ("id" integer NOT NULL, "name" character varying(40), PRIMARY KEY ("id"))"#,
                r#"ALTER TABLE "s"."order" ADD FOREIGN KEY ("user_id") REFERENCES "s"."user" ("id")"#,
                r#"CREATE UNIQUE INDEX ON "s"."order" ("user_id")"#,
            ]
        );
    }

    #[test]
    fn enum_types_come_first() {
        let schema = SchemaDef::new()
            .table(TableDef::new("person").pk("id", "integer").column("mood", "mood"))
            .enum_type("mood", &["sad", "ok"]);

        assert_eq!(
            schema.ddl("s"),
            [
                r#"CREATE TYPE "s"."mood" AS ENUM ('sad', 'ok')"#,
                r#"CREATE TABLE "s"."person" ("id" integer NOT NULL, "mood" "s"."mood", PRIMARY KEY ("id"))"#,
            ]
        );
    }

    #[test]
    fn empty_table_ddl() {
        let schema = SchemaDef::new().table(TableDef::new("empty"));
        assert_eq!(schema.ddl("s"), [r#"CREATE TABLE "s"."empty" ()"#]);
    }
}
