//! Report renderers for normalized ORCID profiles.
//!
//! - [`terminal`] — colored, sectioned output with a summary table; respects
//!   `--verbose` / `--quiet`.
//! - [`markdown`] — Markdown document with configurable heading level.
//! - [`fragments`] — the per-field formatters both renderers share.
//!
//! JSON output serializes the report directly in `main` and ignores the
//! display config: it is the normalized data contract, not a view of it.

pub mod fragments;
pub mod markdown;
pub mod terminal;

use crate::config::Config;
use crate::models::{NormalizedRecord, SectionData};

/// Records of one section that survive the config's exclusion list. Records
/// without a path carry no exclusion key and are always visible.
pub fn visible_records<'a>(data: &'a SectionData, config: &Config) -> Vec<&'a NormalizedRecord> {
    data.records
        .iter()
        .filter(|record| {
            record
                .path
                .as_deref()
                .map_or(true, |path| !config.is_excluded(data.section, path))
        })
        .collect()
}
