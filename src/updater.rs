//! The single-shot fetch-compare-update flow.

use crate::config::Config;
use crate::detector::PublicIpFetcher;
use crate::error::Result;
use crate::godaddy::{GoDaddyClient, PushResponse};
use crate::records::{find_a_record, replace_a_record};

/// What one run did.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The root A record already points at the current public IP.
    Unchanged {
        /// The address both sides agree on.
        ip: String,
    },
    /// The record set was pushed with the root A record rewritten.
    Updated {
        /// The new address.
        ip: String,
        /// The address the A record held before, if one was found.
        previous: Option<String>,
        /// Raw provider response to the push.
        response: PushResponse,
    },
}

/// Run one update cycle: fetch the public IP, compare it to the domain's
/// root A record, and push a rewritten record set on mismatch.
///
/// When no root A record exists the comparison cannot match, so the
/// record set is pushed unchanged.
pub async fn run_once(
    config: &Config,
    fetcher: &PublicIpFetcher,
    client: &GoDaddyClient,
) -> Result<UpdateOutcome> {
    let public_ip = fetcher.fetch().await?;

    let records = client.get_records(&config.domain).await?;
    tracing::debug!("Current DNS entry: {:?}", records);

    let current = find_a_record(&records).map(str::to_string);
    tracing::debug!("Current DNS A record IP: {:?}", current);

    if current.as_deref() == Some(public_ip.as_str()) {
        tracing::debug!("Not updating, entry is correct");
        return Ok(UpdateOutcome::Unchanged { ip: public_ip });
    }

    let updated = replace_a_record(records, &public_ip);
    tracing::debug!("Updated DNS entry: {:?}", updated);

    let response = client.push_records(&config.domain, &updated).await?;

    Ok(UpdateOutcome::Updated {
        ip: public_ip,
        previous: current,
        response,
    })
}
