//! Per-field line formatters for normalized records.
//!
//! Each formatter checks its own field and produces one display fragment, or
//! nothing when the field is absent. [`FRAGMENTS`] lists them in render order
//! so renderers iterate the table instead of hard-coding fields.

use crate::models::{NormalizedRecord, PartialDate};

pub type Fragment = fn(&NormalizedRecord) -> Option<String>;

/// Field-kind formatter registry, in render order.
pub const FRAGMENTS: &[(&str, Fragment)] = &[
    ("subtitle", subtitle),
    ("role", role),
    ("degree", degree),
    ("department", department),
    ("organization", organization),
    ("address", address),
    ("date", date),
    ("journal", journal),
    ("doi", doi),
    ("type", work_type),
];

/// Fragment lines for one record, skipping any fragment that merely repeats
/// the display label (the label is already the record's title line).
pub fn lines(record: &NormalizedRecord) -> Vec<String> {
    FRAGMENTS
        .iter()
        .filter_map(|(_, fragment)| fragment(record))
        .filter(|line| Some(line.as_str()) != record.display_label.as_deref())
        .collect()
}

fn subtitle(record: &NormalizedRecord) -> Option<String> {
    record.subtitle.clone()
}

fn role(record: &NormalizedRecord) -> Option<String> {
    record.role.clone()
}

/// Degree, with the department in parentheses when both are present.
fn degree(record: &NormalizedRecord) -> Option<String> {
    let degree = record.degree.as_ref()?;
    Some(match &record.department {
        Some(department) => format!("{} ({})", degree, department),
        None => degree.clone(),
    })
}

fn department(record: &NormalizedRecord) -> Option<String> {
    record
        .department
        .clone()
        .or_else(|| record.department_name.clone())
}

fn organization(record: &NormalizedRecord) -> Option<String> {
    record.organization.clone()
}

/// City, region, and country joined with commas; nothing when the record has
/// no address or the address has no parts.
fn address(record: &NormalizedRecord) -> Option<String> {
    let address = record.address.as_ref()?;
    let parts: Vec<&str> = [&address.city, &address.region, &address.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// The record's single display date when it has one, otherwise the
/// start – end range. Components render as far as they are present
/// ("2020", "2020-3", "2020-3-15").
fn date(record: &NormalizedRecord) -> Option<String> {
    if let Some(d) = &record.date {
        if d.year.is_some() {
            return Some(format_partial(d));
        }
    }
    let start = record.start_date.as_ref().filter(|d| d.year.is_some());
    let end = record.end_date.as_ref().filter(|d| d.year.is_some());
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} – {}", format_partial(s), format_partial(e))),
        (Some(s), None) => Some(format_partial(s)),
        (None, Some(e)) => Some(format!("– {}", format_partial(e))),
        (None, None) => None,
    }
}

fn format_partial(date: &PartialDate) -> String {
    let mut out = date.year.map(|y| y.to_string()).unwrap_or_default();
    if let Some(month) = date.month {
        out.push_str(&format!("-{}", month));
    }
    if let Some(day) = date.day {
        out.push_str(&format!("-{}", day));
    }
    out
}

fn journal(record: &NormalizedRecord) -> Option<String> {
    record.journal_title.clone()
}

fn doi(record: &NormalizedRecord) -> Option<String> {
    record.doi_url.clone()
}

fn work_type(record: &NormalizedRecord) -> Option<String> {
    record.work_type.clone()
}
