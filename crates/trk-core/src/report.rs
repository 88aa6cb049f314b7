//! Text and JSON rendering of summaries and tag listings.

use std::fmt::Write;

use chrono::TimeDelta;
use serde::Serialize;

use crate::civil::CivilZone;
use crate::period::{Period, Window};
use crate::summary::Summary;
use crate::tags::TagIndex;

/// Width of the `=` rule under report titles.
const RULE_WIDTH: usize = 50;

/// A summary together with the period it covers.
#[derive(Debug, Clone)]
pub struct Report {
    pub period: Period,
    pub window: Window,
    pub zone: CivilZone,
    pub summary: Summary,
    /// Whether per-tag-set lines are rendered.
    pub by_tags: bool,
}

// ========== Duration Formatting ==========

/// Formats a duration as `H:MM`.
///
/// Fractional seconds are truncated, never rounded. Hours are unbounded.
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let hours = seconds.div_euclid(3600);
    let minutes = seconds.rem_euclid(3600) / 60;
    format!("{hours}:{minutes:02}")
}

// ========== Text Output ==========

/// Formats the human-readable summary.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    if report.summary.is_empty() {
        writeln!(output, "No tracked time found for this {}.", report.period).unwrap();
        return output;
    }

    writeln!(output, "Time Summary - This {}", report.period.title()).unwrap();
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
    writeln!(output, "Total: {}", format_duration(report.summary.total)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Breakdown:").unwrap();

    // A header is written whenever the category changes in duration order,
    // so one category can appear more than once.
    let mut current_category: Option<&str> = None;
    for project in &report.summary.projects {
        let category = project.key.category.as_str();
        if current_category != Some(category) {
            if current_category.is_some() {
                writeln!(output).unwrap();
            }
            writeln!(output, "  {category}/").unwrap();
            current_category = Some(category);
        }
        writeln!(
            output,
            "    {}: {}",
            project.key.project,
            format_duration(project.duration)
        )
        .unwrap();

        if report.by_tags {
            for tag in &project.tags {
                writeln!(output, "      {}: {}", tag.tags, format_duration(tag.duration)).unwrap();
            }
        }
    }

    output
}

/// Formats the tag listing.
pub fn format_tag_index(index: &TagIndex) -> String {
    let mut output = String::new();

    if index.is_empty() {
        writeln!(output, "No tags found.").unwrap();
        return output;
    }

    writeln!(output, "Tags by Project").unwrap();
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
    for (category, projects) in index.categories() {
        writeln!(output, "  {category}/").unwrap();
        for (project, tags) in projects {
            if tags.is_empty() {
                writeln!(output, "    {project}: (no tags)").unwrap();
            } else {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                writeln!(output, "    {project}: {}", tags.join(", ")).unwrap();
            }
        }
    }

    output
}

// ========== JSON Output ==========

/// JSON summary structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub period: Period,
    pub timezone: &'static str,
    pub start: String,
    pub end: String,
    pub total_seconds: i64,
    pub entries: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub category: &'a str,
    pub project: &'a str,
    pub seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<JsonTagEntry<'a>>>,
}

#[derive(Debug, Serialize)]
pub struct JsonTagEntry<'a> {
    pub tags: &'a [String],
    pub seconds: i64,
}

/// Formats the summary as JSON, entries in display order.
pub fn format_report_json(report: &Report) -> serde_json::Result<String> {
    let entries = report
        .summary
        .projects
        .iter()
        .map(|project| JsonEntry {
            category: &project.key.category,
            project: &project.key.project,
            seconds: project.duration.num_seconds(),
            tags: report.by_tags.then(|| {
                project
                    .tags
                    .iter()
                    .map(|tag| JsonTagEntry {
                        tags: tag.tags.as_slice(),
                        seconds: tag.duration.num_seconds(),
                    })
                    .collect()
            }),
        })
        .collect();

    let json = JsonReport {
        period: report.period,
        timezone: report.zone.name(),
        start: report.window.start.to_rfc3339(),
        end: report.window.end.to_rfc3339(),
        total_seconds: report.summary.total.num_seconds(),
        entries,
    };

    serde_json::to_string_pretty(&json)
}

/// Formats the tag listing as JSON (`{category: {project: [tags]}}`).
pub fn format_tag_index_json(index: &TagIndex) -> serde_json::Result<String> {
    serde_json::to_string_pretty(index)
}
