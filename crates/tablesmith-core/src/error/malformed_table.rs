use super::Error;

/// Error when a table as a whole cannot be turned into a class: it has no
/// columns, no primary key, or a composite primary key.
#[derive(Debug)]
pub(super) struct MalformedTable {
    table: Box<str>,
    message: Box<str>,
}

impl std::error::Error for MalformedTable {}

impl core::fmt::Display for MalformedTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed table `{}`: {}", self.table, self.message)
    }
}

impl Error {
    pub fn malformed_table(table: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedTable(MalformedTable {
            table: table.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_malformed_table(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::MalformedTable(_)))
    }
}
