use anyhow::Result;

use crate::config::RunConfig;

/// Handles the 'series' command - lists configured series and their sources
pub struct SeriesCommand;

impl SeriesCommand {
    /// Print each configured series with the URL it would be fetched from
    pub fn execute(config: &RunConfig) -> Result<()> {
        println!("Configured series:");

        for series in &config.series {
            println!("  {} -> {}", series, config.url_for(series));
        }

        Ok(())
    }
}
