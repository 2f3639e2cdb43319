//! CLI surface and run configuration.

use crate::error::{Result, UpdateError};
use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "godaddy-ddns")]
#[command(about = "Update a GoDaddy A record to point at your current public IP")]
#[command(version)]
pub struct Cli {
    /// GoDaddy API key
    #[arg(short, long)]
    pub key: Option<String>,

    /// GoDaddy API secret
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Domain name registered with GoDaddy
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved run configuration. Built once at startup, immutable after,
/// passed by reference to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain whose root A record is managed.
    pub domain: String,
    /// GoDaddy API key.
    pub api_key: String,
    /// GoDaddy API secret.
    pub api_secret: String,
    /// Emit diagnostic output.
    pub verbose: bool,
}

impl Config {
    /// Validate CLI input into a complete configuration.
    ///
    /// The first missing required flag is reported; domain, then secret,
    /// then key. `--verbose` can never fail.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let domain = cli
            .domain
            .ok_or_else(|| UpdateError::Config("no domain specified".to_string()))?;
        let api_secret = cli
            .secret
            .ok_or_else(|| UpdateError::Config("no API secret provided".to_string()))?;
        let api_key = cli
            .key
            .ok_or_else(|| UpdateError::Config("no API key provided".to_string()))?;

        Ok(Self {
            domain,
            api_key,
            api_secret,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn full_invocation_resolves() {
        let cli = Cli::parse_from([
            "godaddy-ddns",
            "--domain",
            "example.com",
            "--key",
            "K",
            "--secret",
            "S",
        ]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.domain, "example.com");
        assert_eq!(config.api_key, "K");
        assert_eq!(config.api_secret, "S");
        assert!(!config.verbose);
    }

    #[test]
    fn short_flags_resolve() {
        let cli = Cli::parse_from(["godaddy-ddns", "-d", "example.com", "-k", "K", "-s", "S", "-v"]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.domain, "example.com");
        assert!(config.verbose);
    }

    #[test]
    fn missing_domain_is_reported() {
        let cli = Cli::parse_from(["godaddy-ddns", "--key", "K", "--secret", "S"]);
        let err = Config::from_cli(cli).unwrap_err();

        assert_eq!(err.to_string(), "no domain specified");
    }

    #[test]
    fn missing_secret_is_reported() {
        let cli = Cli::parse_from(["godaddy-ddns", "--domain", "example.com", "--key", "K"]);
        let err = Config::from_cli(cli).unwrap_err();

        assert_eq!(err.to_string(), "no API secret provided");
    }

    #[test]
    fn missing_key_is_reported() {
        let cli = Cli::parse_from(["godaddy-ddns", "--domain", "example.com", "--secret", "S"]);
        let err = Config::from_cli(cli).unwrap_err();

        assert_eq!(err.to_string(), "no API key provided");
    }
}
