use tablesmith_core::{Error, Result};
use tablesmith_driver_postgresql::DEFAULT_SCHEMA;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tablesmith.toml";

/// Configuration for a generation run, usually read from `tablesmith.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Connection string of the database to introspect
    pub database_url: Option<String>,

    /// Schema whose tables are generated
    pub schema: String,

    /// Output-related configuration
    pub output: OutputConfig,
}

/// Where and how generated files are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the generated module tree
    pub path: PathBuf,

    /// Format each file with `rustfmt` when it is installed
    pub rustfmt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            schema: DEFAULT_SCHEMA.to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("src/generated"),
            rustfmt: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::invalid_config(format!("cannot read `{}`: {err}", path.display()))
        })?;

        Self::parse(&text)
            .map_err(|err| err.context(Error::invalid_config(format!("in `{}`", path.display()))))
    }

    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::invalid_config(err.message().to_string()))
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// The configured database URL; a run cannot start without one.
    pub fn require_database_url(&self) -> Result<&str> {
        match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(Error::invalid_config(
                "no database URL; set `database_url` or pass `--url`",
            )),
        }
    }
}

impl OutputConfig {
    /// Create a new OutputConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn rustfmt(mut self, rustfmt: bool) -> Self {
        self.rustfmt = rustfmt;
        self
    }
}
