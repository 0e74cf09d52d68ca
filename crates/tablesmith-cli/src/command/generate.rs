use crate::{writer, Config};

use tablesmith_codegen::Output;
use tablesmith_core::Generator;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Only generate these tables and the tables they relate to (repeatable)
    #[arg(short, long = "table", value_name = "TABLE")]
    tables: Vec<String>,

    /// Output directory, overriding `output.path`
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Write unformatted sources
    #[arg(long)]
    no_rustfmt: bool,
}

impl GenerateCommand {
    pub(crate) async fn run(self, config: &Config) -> Result<()> {
        let target = self.out.unwrap_or_else(|| config.output.path.clone());
        let rustfmt = config.output.rustfmt && !self.no_rustfmt;

        let reader = super::connect(config).await?;
        let generator = Generator::new(reader).only_tables(self.tables);

        let mut output = Output::new();
        let classes = generator.run(&mut output).await?;

        // Release the connection before touching the filesystem
        drop(generator.into_reader());

        println!();
        writer::write_output(&output, &target, rustfmt)?;
        println!();

        for class in &classes {
            for field in class.unmapped_fields() {
                let db_type = field.column().map(|column| &column.db_type[..]).unwrap_or("?");
                println!(
                    "  {}  {}.{} has unmapped type `{}`",
                    style("note").yellow().bold(),
                    class.name,
                    field.name,
                    db_type
                );
            }
        }

        println!(
            "  {} {} classes into {}",
            style("Generated").cyan().bold(),
            classes.len(),
            target.display()
        );
        println!();

        Ok(())
    }
}
