use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::diff::ChangeKind;
use crate::scrape::VersionTable;

/// The report page, compiled into the binary
const REPORT_TEMPLATE: &str = include_str!("report.hbs");

/// Legend entries in display order
const LEGEND: [ChangeKind; 5] = [
    ChangeKind::NoChange,
    ChangeKind::PatchBump,
    ChangeKind::MinorBump,
    ChangeKind::MajorBump,
    ChangeKind::Unavailable,
];

/// Renders version tables into self-contained HTML reports.
///
/// The report embeds the table data as JSON together with a JavaScript
/// restatement of the classifier, so the page colors its own cells when
/// opened and needs no server or external assets.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Create a renderer with the report template registered
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string("report", REPORT_TEMPLATE)
            .expect("Invalid report template");

        Self { handlebars }
    }

    /// Render the report document for one series.
    ///
    /// Column order and row order are preserved in the embedded JSON; the
    /// output is a pure function of the inputs.
    pub fn render(&self, series: &str, table: &VersionTable, column_prefix: &str) -> Result<String> {
        let mut data_object = serde_json::Map::new();

        for row in &table.rows {
            data_object.insert(row.application.clone(), json!(row.cells));
        }

        let legend: Vec<Value> = LEGEND
            .iter()
            .map(|kind| {
                json!({
                    "class": kind.css_class(),
                    "label": kind.label(),
                })
            })
            .collect();

        let context = json!({
            "series": series,
            "column_prefix": column_prefix,
            "columns_json": serde_json::to_string(&table.columns)?,
            "data_json": serde_json::to_string(&Value::Object(data_object))?,
            "legend": legend,
        });

        self.handlebars
            .render("report", &context)
            .context("Failed to render report template")
    }

    /// Render and write the report for one series to `path`
    pub fn write_report(
        &self,
        series: &str,
        table: &VersionTable,
        column_prefix: &str,
        path: &Path,
    ) -> Result<()> {
        let rendered = self.render(series, table, column_prefix)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }

        fs::write(path, rendered)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::VersionRow;

    fn sample_table() -> VersionTable {
        VersionTable {
            columns: vec!["7.9.0".to_string(), "7.8.0".to_string(), "7.7.0".to_string()],
            rows: vec![
                VersionRow::new("Spark", &["3.5.1", "3.5.0", "3.4.0"]),
                VersionRow::new("Flink", &["-", "1.18.0", "1.18.0"]),
            ],
        }
    }

    #[test]
    fn test_report_structure() {
        let renderer = ReportRenderer::new();
        let output = renderer.render("7.x", &sample_table(), "emr-").unwrap();

        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("<title>EMR 7.x Version Differences</title>"));
        assert!(output.contains("EMR 7.x Application Version Differences"));
        assert!(output.contains("id=\"versionTable\""));
    }

    #[test]
    fn test_report_embeds_data_in_order() {
        let renderer = ReportRenderer::new();
        let output = renderer.render("7.x", &sample_table(), "emr-").unwrap();

        assert!(output.contains(r#"const versions = ["7.9.0","7.8.0","7.7.0"];"#));
        assert!(output.contains(
            r#"const data = {"Spark":["3.5.1","3.5.0","3.4.0"],"Flink":["-","1.18.0","1.18.0"]};"#
        ));
        assert!(output.contains(r#"const columnPrefix = "emr-";"#));
    }

    #[test]
    fn test_report_carries_full_legend() {
        let renderer = ReportRenderer::new();
        let output = renderer.render("7.x", &sample_table(), "emr-").unwrap();

        assert!(output.contains("legend-item green\">No Change"));
        assert!(output.contains("legend-item yellow\">Patch Bump (0.0.x)"));
        assert!(output.contains("legend-item orange\">Minor Bump (0.x.0)"));
        assert!(output.contains("legend-item red\">Major Bump (x.0.0)"));
        assert!(output.contains("legend-item gray\">Not Available"));
    }

    #[test]
    fn test_report_restates_classifier() {
        let renderer = ReportRenderer::new();
        let output = renderer.render("7.x", &sample_table(), "emr-").unwrap();

        // The page classifies at load time; the algorithm must travel with it.
        assert!(output.contains("function classify(curr, prev)"));
        assert!(output.contains(r"(\d+)\.(\d+)\.(\d+)"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = ReportRenderer::new();
        let table = sample_table();

        let first = renderer.render("7.x", &table, "emr-").unwrap();
        let second = renderer.render("7.x", &table, "emr-").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("emr-7.x.html");

        let renderer = ReportRenderer::new();
        renderer
            .write_report("7.x", &sample_table(), "emr-", &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("EMR 7.x"));
    }
}
