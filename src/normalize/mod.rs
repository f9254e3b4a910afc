//! Turn a raw ORCID record into ordered, display-ready section records.
//!
//! The record arrives as untyped JSON and is never assumed to be well-formed:
//! absent or misshapen data at any depth yields empty output, not an error.

pub mod extract;

use std::cmp::Reverse;

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::models::{PartialDate, ProcessedProfile, RecordFormat, Section, SectionData};
use crate::sections::{self, SectionSpec};

/// Raw items for one section. Empty when the section is absent from the
/// record or its container is not the shape the registry says it should be.
pub fn items<'a>(section: Section, profile: &'a Value) -> Vec<&'a Value> {
    let spec = section.spec();
    let list_name = match spec.format {
        RecordFormat::AffiliationGroup => "affiliation-group",
        RecordFormat::ActivityGroup => "group",
        RecordFormat::PeerReviewGroup => "peer-review-group",
    };
    profile
        .get("activities-summary")
        .and_then(|activities| activities.get(spec.id))
        .and_then(|container| container.get(list_name))
        .and_then(Value::as_array)
        .map(|list| list.iter().collect())
        .unwrap_or_default()
}

/// Raw items sorted descending by derived comparison date. Ties keep their
/// raw order (the sort is stable); that order is not contractual.
pub fn sorted_items<'a>(section: Section, profile: &'a Value, today: NaiveDate) -> Vec<&'a Value> {
    let spec = section.spec();
    let mut list = items(section, profile);
    list.sort_by_cached_key(|item| Reverse(comparison_date(item, spec, today)));
    list
}

/// Locate the nested date object per the section's format and resolve it to a
/// concrete date. An item carrying no date object at all sorts as "today".
fn comparison_date(item: &Value, spec: &SectionSpec, today: NaiveDate) -> NaiveDate {
    let date_obj = match spec.format {
        RecordFormat::AffiliationGroup => item
            .get("summaries")
            .and_then(|summaries| summaries.get(0))
            .and_then(|summary| summary.get(spec.summary_name))
            .and_then(|summary| summary.get(spec.date_name)),
        RecordFormat::ActivityGroup => item
            .get(spec.summary_name)
            .and_then(|summaries| summaries.get(0))
            .and_then(|summary| summary.get(spec.date_name)),
        RecordFormat::PeerReviewGroup => item
            .get("peer-review-group")
            .and_then(|group| group.get(0))
            .and_then(|group| group.get(spec.summary_name))
            .and_then(|summaries| summaries.get(0))
            .and_then(|summary| summary.get(spec.date_name)),
    };
    match date_obj.filter(|v| !v.is_null()) {
        Some(obj) => PartialDate::from_value(obj)
            .unwrap_or_default()
            .resolve(today),
        None => today,
    }
}

/// Normalize every registered section of a raw record, registry order.
pub fn processed(profile: &Value) -> ProcessedProfile {
    processed_at(profile, Local::now().date_naive())
}

/// As [`processed`], with an explicit "today" so sorting is deterministic.
pub fn processed_at(profile: &Value, today: NaiveDate) -> ProcessedProfile {
    let sections = sections::ALL
        .into_iter()
        .map(|section| SectionData {
            section,
            records: sorted_items(section, profile, today)
                .into_iter()
                .map(|item| extract::record(section, item))
                .collect(),
        })
        .collect();
    ProcessedProfile { sections }
}

/// Researcher display name from the record's `person` block: the credit name
/// when present, otherwise given + family names.
pub fn display_name(profile: &Value) -> Option<String> {
    let name = profile.get("person")?.get("name")?;
    let part = |field: &str| {
        name.get(field)
            .and_then(|f| f.get("value"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    if let Some(credit) = part("credit-name") {
        return Some(credit.to_string());
    }
    match (part("given-names"), part("family-name")) {
        (Some(given), Some(family)) => Some(format!("{} {}", given, family)),
        (Some(given), None) => Some(given.to_string()),
        (None, Some(family)) => Some(family.to_string()),
        (None, None) => None,
    }
}

/// The iD recorded inside the document itself (present on API responses).
pub fn record_orcid_id(profile: &Value) -> Option<String> {
    profile
        .get("orcid-identifier")
        .and_then(|id| id.get("path"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn education_item(path: &str, year: i32) -> Value {
        json!({
            "summaries": [{
                "education-summary": {
                    "path": path,
                    "start-date": {"year": {"value": year.to_string()}},
                    "organization": {"name": "Uni"}
                }
            }]
        })
    }

    #[test]
    fn test_items_missing_section_is_empty() {
        let profile = json!({"activities-summary": {}});
        assert!(items(Section::Educations, &profile).is_empty());
        assert!(items(Section::Works, &profile).is_empty());
    }

    #[test]
    fn test_items_misshapen_container_is_empty() {
        // List field present but not an array
        let profile = json!({
            "activities-summary": {"educations": {"affiliation-group": "oops"}}
        });
        assert!(items(Section::Educations, &profile).is_empty());
        // Container under the wrong list field
        let profile = json!({
            "activities-summary": {"works": {"affiliation-group": [{}]}}
        });
        assert!(items(Section::Works, &profile).is_empty());
    }

    #[test]
    fn test_sorted_items_descending_by_year() {
        let profile = json!({
            "activities-summary": {"educations": {"affiliation-group": [
                education_item("/0001/educations/1", 2015),
                education_item("/0001/educations/2", 2020),
            ]}}
        });
        let sorted = sorted_items(Section::Educations, &profile, today());
        assert_eq!(sorted.len(), 2);
        assert_eq!(
            sorted[0]["summaries"][0]["education-summary"]["path"],
            "/0001/educations/2"
        );
    }

    #[test]
    fn test_sorted_works_by_publication_date() {
        let work = |path: &str, year: i32, month: u32| {
            json!({"work-summary": [{
                "path": path,
                "title": {"title": {"value": "T"}},
                "publication-date": {
                    "year": {"value": year.to_string()},
                    "month": {"value": month.to_string()}
                }
            }]})
        };
        let profile = json!({
            "activities-summary": {"works": {"group": [
                work("/w/1", 2021, 2),
                work("/w/2", 2021, 9),
                work("/w/3", 2019, 12),
            ]}}
        });
        let sorted = sorted_items(Section::Works, &profile, today());
        let paths: Vec<_> = sorted
            .iter()
            .map(|item| item["work-summary"][0]["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["/w/2", "/w/1", "/w/3"]);
    }

    #[test]
    fn test_undated_item_sorts_as_today() {
        // No date object at all resolves to "today", which outranks a dated
        // 2020 item. Quirk preserved from the source behavior.
        let undated = json!({
            "summaries": [{"education-summary": {"path": "/e/undated", "organization": {"name": "U"}}}]
        });
        let profile = json!({
            "activities-summary": {"educations": {"affiliation-group": [
                education_item("/e/2020", 2020),
                undated,
            ]}}
        });
        let sorted = sorted_items(Section::Educations, &profile, today());
        assert_eq!(
            sorted[0]["summaries"][0]["education-summary"]["path"],
            "/e/undated"
        );
    }

    #[test]
    fn test_null_date_object_counts_as_absent() {
        let item = json!({
            "summaries": [{"education-summary": {"start-date": null}}]
        });
        let spec = Section::Educations.spec();
        assert_eq!(comparison_date(&item, spec, today()), today());
    }

    #[test]
    fn test_empty_date_object_gets_component_defaults() {
        let item = json!({
            "summaries": [{"education-summary": {"start-date": {}}}]
        });
        let spec = Section::Educations.spec();
        assert_eq!(
            comparison_date(&item, spec, today()),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_peer_review_comparison_date() {
        let item = json!({
            "peer-review-group": [{
                "peer-review-summary": [{
                    "completion-date": {"year": {"value": "2017"}, "month": {"value": "4"}}
                }]
            }]
        });
        let spec = Section::PeerReviews.spec();
        assert_eq!(
            comparison_date(&item, spec, today()),
            NaiveDate::from_ymd_opt(2017, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_processed_covers_every_section_in_registry_order() {
        let profile = json!({"activities-summary": {}});
        let processed = processed_at(&profile, today());
        let order: Vec<_> = processed.sections.iter().map(|s| s.section).collect();
        assert_eq!(order.as_slice(), sections::ALL.as_slice());
        for data in &processed.sections {
            assert!(data.records.is_empty());
        }
    }

    #[test]
    fn test_processed_maps_items_to_records() {
        let profile = json!({
            "activities-summary": {"educations": {"affiliation-group": [
                education_item("/e/1", 2015),
            ]}}
        });
        let processed = processed_at(&profile, today());
        let records = processed.records(Section::Educations);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path.as_deref(), Some("/e/1"));
        assert_eq!(records[0].display_label.as_deref(), Some("Uni"));
    }

    #[test]
    fn test_display_name_prefers_credit_name() {
        let profile = json!({"person": {"name": {
            "credit-name": {"value": "J. Q. Researcher"},
            "given-names": {"value": "Jane"},
            "family-name": {"value": "Quispe"}
        }}});
        assert_eq!(display_name(&profile).as_deref(), Some("J. Q. Researcher"));
    }

    #[test]
    fn test_display_name_falls_back_to_given_family() {
        let profile = json!({"person": {"name": {
            "given-names": {"value": "Jane"},
            "family-name": {"value": "Quispe"}
        }}});
        assert_eq!(display_name(&profile).as_deref(), Some("Jane Quispe"));
        assert_eq!(display_name(&json!({})), None);
    }

    #[test]
    fn test_record_orcid_id() {
        let profile = json!({"orcid-identifier": {"path": "0000-0002-1825-0097"}});
        assert_eq!(
            record_orcid_id(&profile).as_deref(),
            Some("0000-0002-1825-0097")
        );
        assert_eq!(record_orcid_id(&json!({})), None);
    }
}
