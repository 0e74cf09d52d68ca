//! Mapping from database column type names to target scalar types.

use serde::Serialize;

/// Target-language value type of a scalar field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "db_type", rename_all = "snake_case")]
pub enum ScalarType {
    Bool,
    I16,
    I32,
    I64,
    String,

    /// Arbitrary-precision decimal
    Decimal,

    F32,
    F64,

    /// Civil date without time zone
    Date,

    /// Wall-clock time without time zone
    Time,

    /// Date and time without time zone
    Timestamp,

    /// Unrecognized database type, kept as an opaque value.
    ///
    /// Carries the original database type name so emitters can report it.
    Unknown(String),
}

/// Recognized database type names, with the scalar type each maps to.
///
/// Names are compared exactly as the catalog reports them (`information_schema.columns.data_type`).
const TYPE_MAP: &[(&str, ScalarType)] = &[
    ("boolean", ScalarType::Bool),
    ("smallint", ScalarType::I16),
    ("smallserial", ScalarType::I16),
    ("integer", ScalarType::I32),
    ("serial", ScalarType::I32),
    ("bigint", ScalarType::I64),
    ("bigserial", ScalarType::I64),
    ("text", ScalarType::String),
    ("character varying", ScalarType::String),
    ("character", ScalarType::String),
    ("numeric", ScalarType::Decimal),
    ("money", ScalarType::Decimal),
    ("real", ScalarType::F32),
    ("double precision", ScalarType::F64),
    ("date", ScalarType::Date),
    ("time", ScalarType::Time),
    ("time without time zone", ScalarType::Time),
    ("timestamp", ScalarType::Timestamp),
    ("timestamp without time zone", ScalarType::Timestamp),
];

/// Maps a database type name to a target scalar type.
///
/// This never fails: any name outside the recognized set maps to
/// [`ScalarType::Unknown`] so that one exotic column does not abort the
/// table.
pub fn map_scalar_type(db_type: &str) -> ScalarType {
    TYPE_MAP
        .iter()
        .find(|(name, _)| *name == db_type)
        .map(|(_, ty)| ty.clone())
        .unwrap_or_else(|| ScalarType::Unknown(db_type.to_string()))
}

impl ScalarType {
    /// Returns `true` for the opaque fallback type.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ScalarType::Unknown(_))
    }
}
