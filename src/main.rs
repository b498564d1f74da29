use clap::Parser;
use deskcalc::utils::{logger, validation::Validate};
use deskcalc::{CliConfig, MenuSession, OpenErApi, Settings};
use std::io::{stdin, stdout};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting deskcalc");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let rates = OpenErApi::new(settings.rates_endpoint.clone(), settings.timeout())?;

    let stdin = stdin();
    let mut session = MenuSession::new(stdin.lock(), stdout(), rates);
    session.run().await?;

    tracing::info!("deskcalc exiting");
    Ok(())
}
