use clap::Parser;
use console::style;
use tablesmith_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tablesmith_cli::logging::init(cli.json_logs());

    if let Err(err) = tablesmith_cli::run(cli).await {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}
