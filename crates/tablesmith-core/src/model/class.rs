use super::{FieldMetadata, FieldRole};

use serde::Serialize;

/// One table's complete structural description, ready for emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetadata {
    /// PascalCase class name derived from the table name
    pub name: String,

    /// Column fields in column order, followed by synthesized relationship fields
    pub fields: Vec<FieldMetadata>,

    /// Whether a no-argument constructor must be generated
    pub no_args_constructor: bool,

    /// Persistence-specific extension
    pub entity: Option<EntityMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMapping {
    /// Name of the underlying table
    pub table: String,
}

impl ClassMetadata {
    /// Creates the metadata of a persistent entity backed by `table`.
    ///
    /// Generated records are built by default-construct-then-populate, so the
    /// no-argument constructor is always requested.
    pub fn entity(
        name: impl Into<String>,
        table: impl Into<String>,
        fields: Vec<FieldMetadata>,
    ) -> ClassMetadata {
        ClassMetadata {
            name: name.into(),
            fields,
            no_args_constructor: true,
            entity: Some(EntityMapping {
                table: table.into(),
            }),
        }
    }

    pub fn table_name(&self) -> Option<&str> {
        self.entity.as_ref().map(|entity| &entity.table[..])
    }

    /// The field with the [`FieldRole::Identifier`] role.
    ///
    /// Every class produced by the model builder has exactly one.
    pub fn identifier(&self) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.is_identifier())
    }

    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields_with_role(&self, role: FieldRole) -> impl Iterator<Item = &FieldMetadata> + '_ {
        self.fields.iter().filter(move |field| field.role == role)
    }

    /// Fields whose database type had no scalar mapping.
    pub fn unmapped_fields(&self) -> impl Iterator<Item = &FieldMetadata> + '_ {
        self.fields.iter().filter(|field| field.is_unmapped())
    }

    pub fn has_relations(&self) -> bool {
        self.fields.iter().any(|field| field.is_relation())
    }
}
