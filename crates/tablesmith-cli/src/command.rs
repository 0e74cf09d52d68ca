mod generate;
pub use generate::GenerateCommand;

mod inspect;
pub use inspect::InspectCommand;

use crate::{utility::redact_url_password, Config};

use tablesmith_driver_postgresql::PostgreSQL;

use anyhow::Result;

/// Opens the schema reader described by `config`.
async fn connect(config: &Config) -> Result<PostgreSQL> {
    let url = config.require_database_url()?;

    tracing::info!(
        url = %redact_url_password(url),
        schema = %config.schema,
        "connecting"
    );

    Ok(PostgreSQL::connect(url).await?.with_schema(&config.schema))
}
