/// One column of a table, in column-definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// The name of the column in the database.
    pub name: String,

    /// The declared database type name, e.g. `integer` or `character varying`.
    pub db_type: String,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Maximum character length, for length-limited text columns.
    pub max_length: Option<u32>,

    /// Key-constraint classification.
    pub role: ConstraintRole,

    /// True if the column participates in any unique index on its table.
    ///
    /// This covers the column's own unique constraint as well as composite
    /// and secondary unique indexes, and the primary key index.
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintRole {
    /// Plain column
    None,

    /// The column is (part of) the table's primary key
    PrimaryKey,

    /// The column references another table
    ForeignKey(ForeignKey),
}

/// Target of a foreign-key column.
///
/// Schema readers report the target as optional strings, exactly as the
/// catalog returns them; the model builder rejects incomplete targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Referenced table
    pub table: Option<String>,

    /// Referenced column
    pub column: Option<String>,
}

impl ColumnDescriptor {
    /// A nullable, non-key, non-unique column.
    pub fn new(name: impl Into<String>, db_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_type: db_type.into(),
            nullable: true,
            max_length: None,
            role: ConstraintRole::None,
            unique: false,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self.role, ConstraintRole::PrimaryKey)
    }

    pub fn foreign_key(&self) -> Option<&ForeignKey> {
        match &self.role {
            ConstraintRole::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }
}

impl ForeignKey {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: Some(column.into()),
        }
    }
}
