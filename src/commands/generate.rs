use anyhow::{Context, Result};

use crate::config::RunConfig;
use crate::diff::VersionClassifier;
use crate::report::ReportRenderer;
use crate::scrape::{HttpSource, VersionSource, VersionTable};

/// Handles the 'generate' command - scrapes each series and writes reports
pub struct GenerateCommand;

impl GenerateCommand {
    /// Execute the generate command against the live release guide
    pub fn execute(config: &RunConfig) -> Result<()> {
        let source = HttpSource::new(&config.url_template, &config.column_prefix)
            .context("Failed to create HTTP client")?;

        Self::run(&source, config)
    }

    /// Process every configured series in order.
    ///
    /// A failing series is reported and skipped; it never aborts the rest of
    /// the run. The run itself only fails on setup problems, not on
    /// per-series errors.
    pub fn run(source: &dyn VersionSource, config: &RunConfig) -> Result<()> {
        let classifier = VersionClassifier::new();
        let renderer = ReportRenderer::new();

        for series in &config.series {
            println!("\nFetching EMR {} data...", series);

            match Self::process_series(source, &classifier, &renderer, config, series) {
                Ok(()) => {}
                Err(e) => eprintln!("Error processing EMR {}: {:#}", series, e),
            }
        }

        Ok(())
    }

    /// Fetch, summarize and render one series
    fn process_series(
        source: &dyn VersionSource,
        classifier: &VersionClassifier,
        renderer: &ReportRenderer,
        config: &RunConfig,
        series: &str,
    ) -> Result<()> {
        let table = source.fetch(series)?;

        println!(
            "Found {} EMR versions and {} applications",
            table.column_count(),
            table.row_count()
        );

        Self::report_summary(classifier, &table);

        let path = config.output_path(series);
        renderer.write_report(series, &table, &config.column_prefix, &path)?;

        println!("Generated {}", path.display());

        Ok(())
    }

    /// Print the classification tally for a fetched table
    fn report_summary(classifier: &VersionClassifier, table: &VersionTable) {
        let summary = classifier.summarize(table);

        if summary.total() > 0 {
            println!("  Changes: {}", summary);
        }
    }
}
