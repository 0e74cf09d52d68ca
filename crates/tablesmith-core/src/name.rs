//! Conversions between snake_case database identifiers and target identifiers.
//!
//! Two conventions are fixed policy rather than configuration:
//!
//! * a primary-key column is always named [`ID_FIELD`], whatever its column name;
//! * a foreign-key column is named after the table it references, not after
//!   the column itself (`author_id` referencing `user` becomes `user`).

use std_util::str;

/// Field name given to every primary-key column.
pub const ID_FIELD: &str = "id";

/// Suffix appended to the singular field name of a to-many relationship.
pub const PLURAL_SUFFIX: &str = "s";

/// `order_item` -> `OrderItem`
pub fn class_name(table: &str) -> String {
    str::upper_camel_case(table)
}

/// Derives the field name for a column.
///
/// `references` is the referenced table when the column is a foreign key; the
/// field is then named after that table instead of the column.
pub fn field_name(column: &str, references: Option<&str>) -> String {
    str::camel_case(references.unwrap_or(column))
}

/// Singular field name for a relationship to `table`: `order_item` -> `orderItem`
pub fn singular_field_name(table: &str) -> String {
    str::camel_case(table)
}

/// Collection field name for a relationship to `table`: `order_item` -> `orderItems`
///
/// This appends [`PLURAL_SUFFIX`] to the singular name; it is not linguistic
/// pluralization (`category` becomes `categorys`).
pub fn plural_field_name(table: &str) -> String {
    format!("{}{}", singular_field_name(table), PLURAL_SUFFIX)
}
