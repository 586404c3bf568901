//! Fitout Quote CLI

use std::{io, process::ExitCode};

use tracing::{error, info};

use fitout_pricing::{
    config::QuoteConfig, fixtures::Fixture, observability::init_subscriber, quotes::QuoteService,
};

/// Quote a single catalog item and print the breakdown to stdout.
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match QuoteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Help and version output also arrive here
            _ = err.print();

            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: &QuoteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = Fixture::from_path(&config.catalog)?;
    let item = fixture.item_uuid(&config.item)?;
    let now = config.now();

    info!(item = %config.item, quantity = config.quantity, %now, "quoting item");

    let service = QuoteService::new(fixture.into_catalog());
    let quote = service.quote(item, config.quantity, now).await?;

    quote.write_to(io::stdout().lock())?;

    Ok(())
}
