use super::Error;

/// Error raised when the database connection cannot execute an introspection query.
#[derive(Debug)]
pub(super) struct SchemaAccessError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for SchemaAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for SchemaAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("schema access failed: ")?;

        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a database driver error.
    ///
    /// Schema readers convert every connection or query failure through this
    /// constructor. These errors are never retried and abort the run.
    pub fn schema_access(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::SchemaAccess(SchemaAccessError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a schema access error.
    pub fn is_schema_access(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::SchemaAccess(_)))
    }
}
