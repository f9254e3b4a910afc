//! Per-section mapping from raw ORCID items to [`NormalizedRecord`]s.
//!
//! The seven affiliation-shaped sections share one mapper driven by a small
//! per-section field table. Works, fundings, and peer reviews nest differently
//! enough that each keeps a bespoke mapper.
//!
//! Shared contract: input may have missing nested fields at any depth; output
//! is a best-effort flat record. When the summary object itself is absent the
//! mapper returns the empty record rather than failing.

use serde_json::Value;

use crate::models::{Address, NormalizedRecord, PartialDate, Section};

/// Map one raw item through its section's extraction function.
pub fn record(section: Section, item: &Value) -> NormalizedRecord {
    match section {
        Section::Works => work(item),
        Section::Fundings => funding(item),
        Section::PeerReviews => peer_review(item),
        _ => affiliation(section, item),
    }
}

/// Which label an affiliation section leads with and which optional outputs
/// its mapper fills.
struct AffiliationFields {
    label: Label,
    /// Where the summary's `role-title` lands on the record.
    role_slot: RoleSlot,
    /// Where the summary's `department-name` lands on the record.
    department_slot: DepartmentSlot,
    address: bool,
    /// Repeat the start date as the record's single display date.
    date: bool,
}

enum Label {
    RoleTitle,
    Organization,
}

enum RoleSlot {
    Role,
    Degree,
}

enum DepartmentSlot {
    Department,
    DepartmentName,
}

fn affiliation_fields(section: Section) -> AffiliationFields {
    match section {
        Section::Distinctions => AffiliationFields {
            label: Label::RoleTitle,
            role_slot: RoleSlot::Role,
            department_slot: DepartmentSlot::Department,
            address: false,
            date: true,
        },
        Section::Educations => AffiliationFields {
            label: Label::Organization,
            role_slot: RoleSlot::Degree,
            department_slot: DepartmentSlot::DepartmentName,
            address: true,
            date: false,
        },
        // Employments, invited positions, memberships, qualifications, services
        _ => AffiliationFields {
            label: Label::RoleTitle,
            role_slot: RoleSlot::Role,
            department_slot: DepartmentSlot::DepartmentName,
            address: true,
            date: false,
        },
    }
}

fn affiliation(section: Section, item: &Value) -> NormalizedRecord {
    let spec = section.spec();
    let Some(data) = item
        .get("summaries")
        .and_then(|summaries| summaries.get(0))
        .and_then(|summary| summary.get(spec.summary_name))
        .filter(|data| !data.is_null())
    else {
        return NormalizedRecord::default();
    };

    let fields = affiliation_fields(section);
    let role_title = str_field(data, "role-title");
    let organization = data
        .get("organization")
        .and_then(|org| org.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut record = NormalizedRecord {
        display_label: match fields.label {
            Label::RoleTitle => role_title.clone(),
            Label::Organization => organization.clone(),
        },
        path: str_field(data, "path"),
        organization,
        start_date: date_field(data, "start-date"),
        end_date: date_field(data, "end-date"),
        ..Default::default()
    };

    match fields.role_slot {
        RoleSlot::Role => record.role = role_title,
        RoleSlot::Degree => record.degree = role_title,
    }

    let department = str_field(data, "department-name");
    match fields.department_slot {
        DepartmentSlot::Department => record.department = department,
        DepartmentSlot::DepartmentName => record.department_name = department,
    }

    if fields.address {
        record.address = data
            .get("organization")
            .and_then(|org| org.get("address"))
            .and_then(Address::from_value);
    }
    if fields.date {
        record.date = record.start_date;
    }
    record
}

fn work(item: &Value) -> NormalizedRecord {
    let Some(data) = item
        .get(Section::Works.spec().summary_name)
        .and_then(|summaries| summaries.get(0))
        .filter(|data| !data.is_null())
    else {
        return NormalizedRecord::default();
    };

    let title = data
        .get("title")
        .and_then(|t| t.get("title"))
        .and_then(|t| t.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string);

    NormalizedRecord {
        display_label: title.clone(),
        path: str_field(data, "path"),
        title,
        subtitle: data
            .get("title")
            .and_then(|t| t.get("subtitle"))
            .and_then(|s| s.get("value"))
            .and_then(Value::as_str)
            .map(str::to_string),
        journal_title: value_field(data, "journal-title"),
        // First external id's URL, whatever its type
        doi_url: data
            .get("external-ids")
            .and_then(|ids| ids.get("external-id"))
            .and_then(|ids| ids.get(0))
            .and_then(|id| id.get("external-id-url"))
            .and_then(|url| url.get("value"))
            .and_then(Value::as_str)
            .map(str::to_string),
        source: data
            .get("source")
            .and_then(|s| s.get("source-name"))
            .and_then(|n| n.get("value"))
            .and_then(Value::as_str)
            .map(str::to_string),
        work_type: str_field(data, "type"),
        date: date_field(data, "publication-date"),
        ..Default::default()
    }
}

fn funding(item: &Value) -> NormalizedRecord {
    let Some(data) = item
        .get(Section::Fundings.spec().summary_name)
        .and_then(|summaries| summaries.get(0))
        .filter(|data| !data.is_null())
    else {
        return NormalizedRecord::default();
    };

    let title = data
        .get("title")
        .and_then(|t| t.get("title"))
        .and_then(|t| t.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string);

    NormalizedRecord {
        display_label: title.clone(),
        path: str_field(data, "path"),
        title,
        organization: data
            .get("organization")
            .and_then(|org| org.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        address: data
            .get("organization")
            .and_then(|org| org.get("address"))
            .and_then(Address::from_value),
        start_date: date_field(data, "start-date"),
        end_date: date_field(data, "end-date"),
        ..Default::default()
    }
}

fn peer_review(item: &Value) -> NormalizedRecord {
    let Some(data) = item
        .get("peer-review-group")
        .and_then(|group| group.get(0))
        .and_then(|group| group.get(Section::PeerReviews.spec().summary_name))
        .and_then(|summaries| summaries.get(0))
        .filter(|data| !data.is_null())
    else {
        return NormalizedRecord::default();
    };

    let organization = data
        .get("convening-organization")
        .and_then(|org| org.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    NormalizedRecord {
        display_label: organization.clone(),
        path: str_field(data, "path"),
        organization,
        address: data
            .get("convening-organization")
            .and_then(|org| org.get("address"))
            .and_then(Address::from_value),
        role: str_field(data, "reviewer-role"),
        end_date: date_field(data, "completion-date"),
        ..Default::default()
    }
}

fn str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Read a `{"value": "..."}`-wrapped string field.
fn value_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(|field| field.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn date_field(data: &Value, key: &str) -> Option<PartialDate> {
    data.get(key).and_then(PartialDate::from_value)
}
