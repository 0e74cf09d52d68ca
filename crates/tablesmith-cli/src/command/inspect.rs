use crate::Config;

use tablesmith_core::Generator;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Only inspect these tables and the tables they relate to (repeatable)
    #[arg(short, long = "table", value_name = "TABLE")]
    tables: Vec<String>,
}

impl InspectCommand {
    /// Prints the class metadata of the selected tables as JSON on stdout.
    pub(crate) async fn run(self, config: &Config) -> Result<()> {
        let reader = super::connect(config).await?;
        let generator = Generator::new(reader).only_tables(self.tables);

        let classes = generator.build_all().await?;
        drop(generator.into_reader());

        println!("{}", serde_json::to_string_pretty(&classes)?);

        Ok(())
    }
}
