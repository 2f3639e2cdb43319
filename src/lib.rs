//! # godaddy-ddns
//!
//! Checks the machine's current public IP address and, when it differs
//! from the A record configured for a domain's root ("@") name at
//! GoDaddy, rewrites that record through GoDaddy's v1 API.
//!
//! One shot per invocation; run it from cron or a systemd timer.
//!
//! ## Usage
//!
//! ```bash
//! # Quiet; only failures produce output
//! godaddy-ddns --domain example.com --key KEY --secret SECRET
//!
//! # With diagnostics
//! godaddy-ddns -d example.com -k KEY -s SECRET --verbose
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod godaddy;
pub mod records;
pub mod updater;

pub use config::Config;
pub use detector::PublicIpFetcher;
pub use error::{Result, UpdateError};
pub use godaddy::GoDaddyClient;
pub use updater::{run_once, UpdateOutcome};
