//! HTML table extraction
//!
//! Pulls the application-version table out of a fetched release guide page.
//! The first `<table>` in the document is the one; its header row provides
//! the release columns (first header cell, "Application", is dropped and the
//! upstream label prefix is stripped), and each body row provides one
//! application with its per-release cells.

use scraper::{ElementRef, Html, Selector};

use super::error::ScrapeError;
use super::types::{VersionRow, VersionTable};

/// Extract the version table from a release guide document.
///
/// `column_prefix` is stripped from header labels (e.g. `emr-7.9.0` becomes
/// `7.9.0`); the renderer re-applies it for display. Rows whose cell count
/// does not match the column count make the whole document invalid.
pub fn extract(html: &str, column_prefix: &str) -> Result<VersionTable, ScrapeError> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("table").expect("Invalid table selector");
    let row_selector = Selector::parse("tr").expect("Invalid row selector");
    let header_selector = Selector::parse("th").expect("Invalid header selector");
    let cell_selector = Selector::parse("td").expect("Invalid cell selector");

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ScrapeError::MissingTable)?;

    let mut row_iter = table.select(&row_selector);

    let header = row_iter.next().ok_or(ScrapeError::MissingHeader)?;
    let labels: Vec<String> = header.select(&header_selector).map(|th| cell_text(&th)).collect();

    // First header cell is the application-name column, not a release.
    if labels.len() < 2 {
        return Err(ScrapeError::MissingHeader);
    }

    let columns: Vec<String> = labels[1..]
        .iter()
        .map(|label| label.strip_prefix(column_prefix).unwrap_or(label).to_string())
        .collect();

    let mut rows = Vec::new();

    for row in row_iter {
        let mut cells = row.select(&cell_selector);

        // Header-only rows (e.g. a repeated <th> row) carry no <td> cells.
        let Some(first) = cells.next() else {
            continue;
        };

        let application = cell_text(&first);

        // Version cells have all whitespace removed; upstream wraps long
        // values across lines inside the cell.
        let versions: Vec<String> = cells.map(|td| cell_text(&td).replace(' ', "")).collect();

        if versions.len() != columns.len() {
            return Err(ScrapeError::RowShape {
                application,
                expected: columns.len(),
                found: versions.len(),
            });
        }

        rows.push(VersionRow {
            application,
            cells: versions,
        });
    }

    Ok(VersionTable { columns, rows })
}

/// Collect an element's text content with whitespace collapsed and trimmed
fn cell_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> &'static str {
        r#"<html><body>
        <p>Some surrounding prose.</p>
        <table>
          <thead>
            <tr><th>Application</th><th>emr-7.9.0</th><th>emr-7.8.0</th><th>emr-7.7.0</th></tr>
          </thead>
          <tbody>
            <tr><td>Spark</td><td>3.5.1</td><td>3.5.0</td><td>3.4.0</td></tr>
            <tr><td>Flink</td><td>-</td><td>1.18.0</td><td>1.18.0</td></tr>
            <tr><td>Hadoop</td><td>
              3.3.6
            </td><td>3.3.6</td><td>3.3.6</td></tr>
          </tbody>
        </table>
        </body></html>"#
    }

    #[test]
    fn test_extract_columns_with_prefix_stripped() {
        let table = extract(sample_document(), "emr-").unwrap();
        assert_eq!(table.columns, vec!["7.9.0", "7.8.0", "7.7.0"]);
    }

    #[test]
    fn test_extract_rows_in_document_order() {
        let table = extract(sample_document(), "emr-").unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0].application, "Spark");
        assert_eq!(table.rows[0].cells, vec!["3.5.1", "3.5.0", "3.4.0"]);
        assert_eq!(table.rows[1].application, "Flink");
        assert_eq!(table.rows[1].cells, vec!["-", "1.18.0", "1.18.0"]);
    }

    #[test]
    fn test_extract_strips_whitespace_from_cells() {
        let table = extract(sample_document(), "emr-").unwrap();
        assert_eq!(table.rows[2].cells[0], "3.3.6");
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let err = extract("<html><body><p>No table here</p></body></html>", "emr-").unwrap_err();
        assert!(matches!(err, ScrapeError::MissingTable));
    }

    #[test]
    fn test_header_without_release_columns_is_an_error() {
        let html = "<table><tr><th>Application</th></tr></table>";
        let err = extract(html, "emr-").unwrap_err();
        assert!(matches!(err, ScrapeError::MissingHeader));
    }

    #[test]
    fn test_short_row_is_an_error() {
        let html = r#"<table>
          <tr><th>Application</th><th>emr-7.9.0</th><th>emr-7.8.0</th></tr>
          <tr><td>Spark</td><td>3.5.1</td></tr>
        </table>"#;

        let err = extract(html, "emr-").unwrap_err();

        match err {
            ScrapeError::RowShape {
                application,
                expected,
                found,
            } => {
                assert_eq!(application, "Spark");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected RowShape, got {:?}", other),
        }
    }

    #[test]
    fn test_unprefixed_labels_pass_through() {
        let html = r#"<table>
          <tr><th>Application</th><th>7.9.0</th></tr>
          <tr><td>Spark</td><td>3.5.1</td></tr>
        </table>"#;

        let table = extract(html, "emr-").unwrap();
        assert_eq!(table.columns, vec!["7.9.0"]);
    }
}
