use crate::config::Config;
use crate::models::ProfileReport;
use crate::report::{fragments, visible_records};

/// Render one researcher's profile as a Markdown document. Section headings
/// sit at the configured heading level; the researcher's name one level above.
pub fn render(report: &ProfileReport, config: &Config) -> String {
    let mut out = String::new();
    let section_level = config.heading_level();
    let title_level = section_level.saturating_sub(1).max(1);

    let title = report.name.as_deref().unwrap_or(&report.orcid_id);
    out.push_str(&format!("{} {}\n\n", hashes(title_level), title));
    if report.name.is_some() {
        out.push_str(&format!(
            "ORCID iD: [{0}](https://orcid.org/{0})\n\n",
            report.orcid_id
        ));
    }

    for data in &report.data.sections {
        if !config.is_shown(data.section) {
            continue;
        }
        let records = visible_records(data, config);
        if records.is_empty() {
            continue;
        }

        out.push_str(&format!("{} {}\n\n", hashes(section_level), data.section.term()));
        for record in records {
            let Some(label) = record.display_label.as_deref() else {
                continue;
            };
            out.push_str(&format!("- **{}**\n", label));
            for line in fragments::lines(record) {
                out.push_str(&format!("  - {}\n", line));
            }
        }
        out.push('\n');
    }
    out
}

fn hashes(level: u8) -> String {
    "#".repeat(level as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        NormalizedRecord, PartialDate, ProcessedProfile, ProfileReport, Section, SectionData,
    };
    use crate::sections;

    fn sample_report() -> ProfileReport {
        let work = NormalizedRecord {
            display_label: Some("Paper A".to_string()),
            path: Some("/0001/work/1".to_string()),
            title: Some("Paper A".to_string()),
            journal_title: Some("Nature".to_string()),
            date: Some(PartialDate { year: Some(2021), month: None, day: None }),
            ..Default::default()
        };
        let hidden_work = NormalizedRecord {
            display_label: Some("Paper B".to_string()),
            path: Some("/0001/work/2".to_string()),
            ..Default::default()
        };
        let sections = sections::ALL
            .into_iter()
            .map(|section| SectionData {
                section,
                records: if section == Section::Works {
                    vec![work.clone(), hidden_work.clone()]
                } else {
                    Vec::new()
                },
            })
            .collect();
        ProfileReport {
            orcid_id: "0000-0002-1825-0097".to_string(),
            name: Some("Josiah Carberry".to_string()),
            data: ProcessedProfile { sections },
        }
    }

    #[test]
    fn test_render_headings_and_records() {
        let out = render(&sample_report(), &Config::default());
        assert!(out.starts_with("# Josiah Carberry\n"));
        assert!(out.contains("## Works\n"));
        assert!(out.contains("- **Paper A**\n"));
        assert!(out.contains("  - 2021\n"));
        assert!(out.contains("  - Nature\n"));
        assert!(out.contains("https://orcid.org/0000-0002-1825-0097"));
    }

    #[test]
    fn test_empty_sections_are_hidden() {
        let out = render(&sample_report(), &Config::default());
        assert!(!out.contains("## Education"));
        assert!(!out.contains("## Peer Reviews"));
    }

    #[test]
    fn test_excluded_record_is_hidden() {
        let config: Config =
            toml::from_str("[display.sections.works]\nexclude = [\"/0001/work/2\"]\n").unwrap();
        let out = render(&sample_report(), &config);
        assert!(out.contains("Paper A"));
        assert!(!out.contains("Paper B"));
    }

    #[test]
    fn test_hidden_section_is_skipped() {
        let config: Config = toml::from_str("[display.sections.works]\nshow = false\n").unwrap();
        let out = render(&sample_report(), &config);
        assert!(!out.contains("## Works"));
        assert!(!out.contains("Paper A"));
    }

    #[test]
    fn test_configured_heading_level() {
        let config: Config = toml::from_str("[display]\nheading_level = 3\n").unwrap();
        let out = render(&sample_report(), &config);
        assert!(out.starts_with("## Josiah Carberry\n"));
        assert!(out.contains("### Works\n"));
    }
}
