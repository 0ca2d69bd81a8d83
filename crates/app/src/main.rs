//! Storefront Cart CLI

use std::{io, process};

use clap::Parser;
use storefront_app::{
    cli::{self, CartCommand},
    config::{LoggingConfig, StorefrontConfig},
    context::AppContext,
    logging,
};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront cart CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    storefront: StorefrontConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: CartCommand,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        report(&error);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    logging::init(&cli.logging).map_err(|error| format!("failed to initialise logging: {error}"))?;

    let context = AppContext::from_config(&cli.storefront).map_err(|error| error.to_string())?;

    let mut stdout = io::stdout().lock();

    cli::run(cli.command, &context, &mut stdout)
        .await
        .map_err(|error| error.to_string())
}

#[expect(clippy::print_stderr, reason = "the CLI reports fatal errors on stderr")]
fn report(error: &str) {
    eprintln!("{error}");
}
