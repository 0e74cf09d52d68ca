/// A table whose foreign key references the table being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildReference {
    /// Name of the referencing (child) table
    pub table: String,

    /// Referencing column in the child table
    pub column: String,

    /// True if the referencing column is covered by a unique index in the
    /// child table. A unique reference is one-to-one, otherwise one-to-many.
    pub unique: bool,
}
