use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::config::Config;
use crate::models::{NormalizedRecord, ProfileReport, SectionData};
use crate::report::{fragments, visible_records};

/// Render a colored terminal report for one researcher.
pub fn render(report: &ProfileReport, config: &Config, verbose: bool, quiet: bool) {
    let shown: Vec<(&SectionData, Vec<&NormalizedRecord>)> = report
        .data
        .sections
        .iter()
        .filter(|data| config.is_shown(data.section))
        .map(|data| (data, visible_records(data, config)))
        .collect();

    let total: usize = shown.iter().map(|(_, records)| records.len()).sum();
    let populated = shown.iter().filter(|(_, records)| !records.is_empty()).count();

    if quiet {
        println!(
            "{}  {} records in {} sections",
            report.orcid_id, total, populated
        );
        return;
    }

    println!("\n {} v{}", "orcid-rendr".bold(), env!("CARGO_PKG_VERSION"));
    match &report.name {
        Some(name) => println!(" {}  ({})\n", name.bold().cyan(), report.orcid_id),
        None => println!(" {}\n", report.orcid_id.bold().cyan()),
    }

    // Per-section record counts
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Section").add_attribute(Attribute::Bold),
            Cell::new("Records").add_attribute(Attribute::Bold),
        ]);
    for (data, records) in &shown {
        table.add_row(vec![
            Cell::new(data.section.term()),
            Cell::new(records.len().to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}\n");

    // One heading + list per populated section; empty sections stay hidden
    for (data, records) in &shown {
        if records.is_empty() {
            continue;
        }
        println!(" {}", data.section.term().bold().underline());
        for record in records {
            let Some(label) = record.display_label.as_deref() else {
                continue;
            };
            println!("   {} {}", "•".cyan(), label.bold());
            if verbose {
                for line in fragments::lines(record) {
                    println!("     {}", line.dimmed());
                }
            }
        }
        println!();
    }
}
