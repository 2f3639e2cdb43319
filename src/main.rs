//! godaddy-ddns - single-shot GoDaddy dynamic DNS updater.

use clap::{CommandFactory, Parser};
use godaddy_ddns::config::{Cli, Config};
use godaddy_ddns::detector::PublicIpFetcher;
use godaddy_ddns::godaddy::GoDaddyClient;
use godaddy_ddns::updater::{run_once, UpdateOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}\n");
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    };

    init_logging(config.verbose);

    let fetcher = PublicIpFetcher::new();
    let client = GoDaddyClient::new(config.api_key.clone(), config.api_secret.clone());

    match run_once(&config, &fetcher, &client).await? {
        UpdateOutcome::Unchanged { .. } => {}
        UpdateOutcome::Updated { response, .. } => {
            let failed = !response.is_success();

            if config.verbose || failed {
                println!("{}", response.status);
                println!("{}", response.body);
            }

            // A rejected push is a failed run.
            if failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Debug-level logging with `--verbose`, warnings only otherwise;
/// `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "godaddy_ddns=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
