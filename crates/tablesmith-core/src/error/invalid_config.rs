use crate::Error;

/// The configuration file could not be parsed, or a required setting is missing.
#[derive(Debug)]
pub(super) struct InvalidConfig {
    pub(super) message: Box<str>,
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfig {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_config(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidConfig(_)))
    }
}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}
