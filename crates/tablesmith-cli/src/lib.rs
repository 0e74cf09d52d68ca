mod command;
use command::{GenerateCommand, InspectCommand};

mod config;
pub use config::*;

pub mod logging;

mod utility;

mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tablesmith")]
#[command(about = "Tablesmith - generate Rust records and services from a database schema")]
#[command(version)]
pub struct Cli {
    /// Configuration file [default: tablesmith.toml]
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database URL, overriding `database_url`
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Schema to introspect, overriding `schema`
    #[arg(long, global = true)]
    schema: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the record, repository, service and API modules
    Generate(GenerateCommand),

    /// Print the class metadata of each table as JSON
    Inspect(InspectCommand),
}

impl Cli {
    /// Whether logs should be written as JSON
    pub fn json_logs(&self) -> bool {
        self.json
    }

    /// Resolves the run configuration: the config file, then command-line
    /// overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Config::load(DEFAULT_CONFIG_FILE)?,
            None => Config::default(),
        };

        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.database_url = Some(url.clone());
        }

        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }

        config
    }
}

/// Execute an already parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    match cli.command {
        Command::Generate(cmd) => cmd.run(&config).await,
        Command::Inspect(cmd) => cmd.run(&config).await,
    }
}
