//! Static registry of the ORCID activities sections this tool understands.
//!
//! Each section declares where its raw item list lives ([`RecordFormat`]),
//! which nested object carries the date/display fields, and whether individual
//! records may be excluded from display. The registry is fixed at compile time;
//! callers only ever iterate [`ALL`].

use crate::models::{RecordFormat, Section};

/// Declarative description of one activities section.
#[derive(Debug)]
pub struct SectionSpec {
    /// Key of the section inside `activities-summary` (and in config files).
    pub id: &'static str,
    /// Heading shown above the section when rendered.
    pub term: &'static str,
    pub format: RecordFormat,
    /// Field holding the date-bearing summary object.
    pub summary_name: &'static str,
    /// Sub-field of the summary holding the comparison date.
    pub date_name: &'static str,
    /// Whether individual records may be hidden via config.
    pub can_exclude: bool,
}

/// Registry iteration order; also the order sections appear in output.
pub const ALL: [Section; 10] = [
    Section::Distinctions,
    Section::Educations,
    Section::Employments,
    Section::Fundings,
    Section::InvitedPositions,
    Section::Memberships,
    Section::PeerReviews,
    Section::Qualifications,
    Section::Services,
    Section::Works,
];

static DISTINCTIONS: SectionSpec = SectionSpec {
    id: "distinctions",
    term: "Distinctions",
    format: RecordFormat::AffiliationGroup,
    summary_name: "distinction-summary",
    date_name: "start-date",
    can_exclude: true,
};

static EDUCATIONS: SectionSpec = SectionSpec {
    id: "educations",
    term: "Education",
    format: RecordFormat::AffiliationGroup,
    summary_name: "education-summary",
    date_name: "start-date",
    can_exclude: true,
};

static EMPLOYMENTS: SectionSpec = SectionSpec {
    id: "employments",
    term: "Employment",
    format: RecordFormat::AffiliationGroup,
    summary_name: "employment-summary",
    date_name: "start-date",
    can_exclude: true,
};

static FUNDINGS: SectionSpec = SectionSpec {
    id: "fundings",
    term: "Funding",
    format: RecordFormat::ActivityGroup,
    summary_name: "funding-summary",
    date_name: "start-date",
    can_exclude: true,
};

static INVITED_POSITIONS: SectionSpec = SectionSpec {
    id: "invited-positions",
    term: "Invited Positions",
    format: RecordFormat::AffiliationGroup,
    summary_name: "invited-position-summary",
    date_name: "start-date",
    can_exclude: true,
};

static MEMBERSHIPS: SectionSpec = SectionSpec {
    id: "memberships",
    term: "Memberships",
    format: RecordFormat::AffiliationGroup,
    summary_name: "membership-summary",
    date_name: "start-date",
    can_exclude: true,
};

static PEER_REVIEWS: SectionSpec = SectionSpec {
    id: "peer-reviews",
    term: "Peer Reviews",
    format: RecordFormat::PeerReviewGroup,
    summary_name: "peer-review-summary",
    date_name: "completion-date",
    can_exclude: true,
};

static QUALIFICATIONS: SectionSpec = SectionSpec {
    id: "qualifications",
    term: "Qualifications",
    format: RecordFormat::AffiliationGroup,
    summary_name: "qualification-summary",
    date_name: "start-date",
    can_exclude: true,
};

static SERVICES: SectionSpec = SectionSpec {
    id: "services",
    term: "Service",
    format: RecordFormat::AffiliationGroup,
    summary_name: "service-summary",
    date_name: "start-date",
    can_exclude: true,
};

static WORKS: SectionSpec = SectionSpec {
    id: "works",
    term: "Works",
    format: RecordFormat::ActivityGroup,
    summary_name: "work-summary",
    date_name: "publication-date",
    can_exclude: true,
};

impl Section {
    pub fn spec(self) -> &'static SectionSpec {
        match self {
            Section::Distinctions => &DISTINCTIONS,
            Section::Educations => &EDUCATIONS,
            Section::Employments => &EMPLOYMENTS,
            Section::Fundings => &FUNDINGS,
            Section::InvitedPositions => &INVITED_POSITIONS,
            Section::Memberships => &MEMBERSHIPS,
            Section::PeerReviews => &PEER_REVIEWS,
            Section::Qualifications => &QUALIFICATIONS,
            Section::Services => &SERVICES,
            Section::Works => &WORKS,
        }
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn term(self) -> &'static str {
        self.spec().term
    }

    /// Look a section up by its registry id (used for config keys).
    pub fn from_id(id: &str) -> Option<Section> {
        ALL.into_iter().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for section in ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("bogus"), None);
    }

    #[test]
    fn test_summary_names_follow_ids() {
        // Affiliation sections name their summary after the singular id.
        assert_eq!(Section::Educations.spec().summary_name, "education-summary");
        assert_eq!(
            Section::InvitedPositions.spec().summary_name,
            "invited-position-summary"
        );
    }

    #[test]
    fn test_date_names() {
        assert_eq!(Section::Works.spec().date_name, "publication-date");
        assert_eq!(Section::PeerReviews.spec().date_name, "completion-date");
        for section in ALL {
            let spec = section.spec();
            if spec.format == RecordFormat::AffiliationGroup {
                assert_eq!(spec.date_name, "start-date");
            }
        }
    }
}
