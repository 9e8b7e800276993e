use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use trivia_browse::Config;
use trivia_browse::commands::cmd_browse;

#[derive(Parser)]
#[command(name = "trivia-browse")]
#[command(about = "Browse, filter and search trivia questions served by a remote API")]
#[command(version)]
struct Cli {
    /// Config file (default: ./trivia-browse.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the API, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Collection segment of endpoint paths (e.g. 'questions')
    #[arg(long)]
    collection: Option<String>,
}

fn load_config(cli: &Cli) -> trivia_browse::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(collection) = &cli.collection {
        config.collection = collection.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match load_config(&cli) {
        Ok(config) => cmd_browse(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
