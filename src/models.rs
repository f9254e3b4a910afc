use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One activities section of an ORCID record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Distinctions,
    Educations,
    Employments,
    Fundings,
    InvitedPositions,
    Memberships,
    PeerReviews,
    Qualifications,
    Services,
    Works,
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.term())
    }
}

/// The three container shapes ORCID uses for activities sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// List under `"affiliation-group"`; summary at `summaries[0][summary_name]`.
    AffiliationGroup,
    /// List under `"group"`; summary at `item[summary_name][0]` (works, fundings).
    ActivityGroup,
    /// List under `"peer-review-group"`; summary at
    /// `item["peer-review-group"][0][summary_name][0]`.
    PeerReviewGroup,
}

/// An ORCID date with any of its components possibly absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PartialDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl PartialDate {
    /// Parse ORCID's `{"year": {"value": "2020"}, ...}` shape. Component values
    /// may arrive as JSON strings or numbers; `null` or a non-object yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let component = |name: &str| -> Option<i64> {
            match obj.get(name)?.get("value")? {
                Value::String(s) => s.trim().parse().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            }
        };
        Some(PartialDate {
            year: component("year").map(|y| y as i32),
            month: component("month").map(|m| m as u32),
            day: component("day").map(|d| d as u32),
        })
    }

    /// Concrete calendar date for sorting: absent year defaults to the current
    /// year, absent month to July, absent day to the 1st.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(7);
        let day = self.day.unwrap_or(1);
        NaiveDate::from_ymd_opt(year, month, day)
            // Out-of-range day in the source data clamps to the 1st
            .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
            .unwrap_or(today)
    }
}

/// Organization address as ORCID records it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let field = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_string);
        Some(Address {
            city: field("city"),
            region: field("region"),
            country: field("country"),
        })
    }
}

/// Flat, display-ready record produced per raw item. Which fields are filled
/// depends on the section; a raw item whose summary object is absent yields
/// the all-`None` default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Stable identity within a section; the exclusion key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "journal-title", skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<PartialDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<PartialDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<PartialDate>,
}

impl NormalizedRecord {
    pub fn is_empty(&self) -> bool {
        *self == NormalizedRecord::default()
    }
}

/// Ordered per-section output of the normalizer, registry order.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedProfile {
    pub sections: Vec<SectionData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub section: Section,
    pub records: Vec<NormalizedRecord>,
}

impl ProcessedProfile {
    pub fn records(&self, section: Section) -> &[NormalizedRecord] {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }
}

/// Everything the renderers need for one researcher.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub orcid_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub data: ProcessedProfile,
}
