use super::Error;

/// Error when the key-constraint metadata for a column is inconsistent.
///
/// This occurs when:
/// - A foreign key entry has no referenced table or column
/// - A column carries two foreign keys pointing at different tables
/// - Two fields of the same class would be given the same name (for example
///   two foreign keys to the same referenced table)
///
/// The error is fatal for the table being built.
#[derive(Debug)]
pub(super) struct MalformedConstraint {
    table: Box<str>,
    column: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for MalformedConstraint {}

impl core::fmt::Display for MalformedConstraint {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.column {
            Some(column) => write!(
                f,
                "malformed constraint on `{}.{}`: {}",
                self.table, column, self.message
            ),
            None => write!(
                f,
                "malformed constraint on `{}`: {}",
                self.table, self.message
            ),
        }
    }
}

impl Error {
    /// Creates a malformed constraint error for `table`, optionally naming the column.
    pub fn malformed_constraint(
        table: impl Into<String>,
        column: Option<&str>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MalformedConstraint(MalformedConstraint {
            table: table.into().into(),
            column: column.map(Into::into),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed constraint error.
    pub fn is_malformed_constraint(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::MalformedConstraint(_)))
    }

    /// Returns the table and column that triggered a malformed constraint error.
    pub fn malformed_constraint_location(&self) -> Option<(&str, Option<&str>)> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::MalformedConstraint(err) => {
                Some((&*err.table, err.column.as_deref()))
            }
            _ => None,
        })
    }
}
