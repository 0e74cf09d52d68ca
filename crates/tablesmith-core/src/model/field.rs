use crate::ty::ScalarType;

use serde::Serialize;

/// A single field of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMetadata {
    /// camelCase field name
    pub name: String,

    /// Value type of the field
    pub ty: FieldTy,

    /// Semantic role of the field
    pub role: FieldRole,

    /// How the field maps back onto the database
    pub mapping: FieldMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTy {
    /// Primitive value
    Scalar(ScalarType),

    /// Single instance of another class, by class name
    Reference(String),

    /// Collection of another class, by class name
    Collection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// The table's primary key
    Identifier,

    /// Plain value column
    Scalar,

    /// Foreign-key column of this table, pointing at its parent
    ToOneInbound,

    /// A child table references this one through a unique column
    ToOneOutbound,

    /// A child table references this one through a non-unique column
    ToManyOutbound,
}

/// Multiplicity of a relationship, seen from the referenced (parent) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    One,
    Many,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMapping {
    /// Field backed by a column of the class's own table.
    Column(ColumnMapping),

    /// Relationship field owned by the child table's foreign key.
    MappedBy(MappedBy),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    /// Column name in the database
    pub column: String,

    /// Declared database type
    pub db_type: String,

    pub nullable: bool,

    pub max_length: Option<u32>,

    /// True if the column is covered by a unique index
    pub unique: bool,

    /// Referenced column, for foreign keys
    pub references: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedBy {
    /// The child table holding the foreign key
    pub table: String,

    /// The foreign-key column in the child table
    pub column: String,

    /// Name of the inbound field on the child class that owns the relationship
    pub field: String,
}

impl FieldMetadata {
    pub fn is_identifier(&self) -> bool {
        self.role == FieldRole::Identifier
    }

    /// Returns `true` if the field is a relationship to another class.
    pub fn is_relation(&self) -> bool {
        matches!(
            self.role,
            FieldRole::ToOneInbound | FieldRole::ToOneOutbound | FieldRole::ToManyOutbound
        )
    }

    /// Returns `true` if the field's database type had no mapping.
    pub fn is_unmapped(&self) -> bool {
        matches!(&self.ty, FieldTy::Scalar(ty) if ty.is_unknown())
    }

    /// The column backing this field, if any.
    pub fn column(&self) -> Option<&ColumnMapping> {
        match &self.mapping {
            FieldMapping::Column(column) => Some(column),
            FieldMapping::MappedBy(_) => None,
        }
    }

    pub fn mapped_by(&self) -> Option<&MappedBy> {
        match &self.mapping {
            FieldMapping::MappedBy(mapped_by) => Some(mapped_by),
            FieldMapping::Column(_) => None,
        }
    }

    /// Cardinality of an inbound reference: one-to-one when the foreign-key
    /// column is unique, many-to-one otherwise.
    pub fn inbound_cardinality(&self) -> Option<Cardinality> {
        if self.role != FieldRole::ToOneInbound {
            return None;
        }

        self.column().map(|column| {
            if column.unique {
                Cardinality::One
            } else {
                Cardinality::Many
            }
        })
    }
}

impl FieldTy {
    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            FieldTy::Scalar(ty) => Some(ty),
            _ => None,
        }
    }

    /// The class name of a reference or collection type.
    pub fn target_class(&self) -> Option<&str> {
        match self {
            FieldTy::Scalar(_) => None,
            FieldTy::Reference(class) | FieldTy::Collection(class) => Some(class),
        }
    }
}
