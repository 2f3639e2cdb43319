//! DNS record sets and root A record reconciliation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One DNS record as returned by the GoDaddy records endpoint.
///
/// Only `type`, `name` and `data` are ever inspected. Everything else the
/// provider sends (TTL, priority, ...) lands in `extra` and is written
/// back unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record type, e.g. "A".
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name; "@" is the bare domain.
    pub name: String,
    /// Record value, an IP address for A records.
    pub data: String,
    /// Provider-defined fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl DnsRecord {
    fn is_root_a(&self) -> bool {
        self.record_type == "A" && self.name == "@"
    }
}

/// Return the address of the A record for the root ("@") name, or `None`
/// if the set has no such record.
///
/// Records are scanned in received order; if several match, the last one
/// wins.
pub fn find_a_record(records: &[DnsRecord]) -> Option<&str> {
    let mut found = None;
    for record in records {
        if record.is_root_a() {
            found = Some(record.data.as_str());
        }
    }
    found
}

/// Produce a record set with the root A record pointed at `new_ip`.
///
/// Every matching record is rewritten, not just the first. All other
/// records and fields are left alone; length and order are preserved.
pub fn replace_a_record(mut records: Vec<DnsRecord>, new_ip: &str) -> Vec<DnsRecord> {
    for record in &mut records {
        if record.is_root_a() {
            record.data = new_ip.to_string();
        }
    }
    records
}
