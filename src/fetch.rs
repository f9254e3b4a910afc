//! Async client for the public ORCID API.
//!
//! One endpoint: `GET /v3.0/{id}/record`, JSON requested via the `Accept`
//! header. Failures surface as errors for the caller to log; no retries.

use anyhow::{bail, Result};
use regex::Regex;
use reqwest::Client;
use serde_json::Value;

const API_BASE: &str = "https://pub.orcid.org/v3.0";

/// Check the ORCID iD shape: four dash-separated groups of four digits, where
/// the final character may be the checksum letter X.
pub fn is_valid_orcid_id(id: &str) -> bool {
    Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$")
        .map(|re| re.is_match(id))
        .unwrap_or(false)
}

/// Fetch the full public record for one ORCID iD.
pub async fn fetch_record(client: &Client, orcid_id: &str) -> Result<Value> {
    let url = format!("{}/{}/record", API_BASE, orcid_id);

    let response = client
        .get(&url)
        .header("User-Agent", "orcid-rendr/0.1.0")
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("ORCID API returned {} for {}", response.status(), orcid_id);
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_orcid_id("0000-0002-1825-0097"));
        assert!(is_valid_orcid_id("0000-0002-1694-233X"));
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_orcid_id(""));
        assert!(!is_valid_orcid_id("0000-0002-1825-009"));
        assert!(!is_valid_orcid_id("0000-0002-1825-00977"));
        assert!(!is_valid_orcid_id("0000_0002_1825_0097"));
        assert!(!is_valid_orcid_id("0000-0002-1825-009x"));
        assert!(!is_valid_orcid_id("abcd-0002-1825-0097"));
    }
}
