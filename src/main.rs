mod commands;
mod config;
mod diff;
mod report;
mod scrape;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, SeriesCommand};
use config::RunConfig;

#[derive(Parser)]
#[command(name = "emr-diff")]
#[command(about = "Scrapes EMR release application-version tables and renders color-coded diff reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch each series and write one HTML report per series
    Generate {
        /// Series to process (repeatable; defaults to 7.x, 6.x, 5.x, 4.x)
        #[arg(short, long)]
        series: Vec<String>,

        /// Directory to write reports into (defaults to current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Document URL template; must contain a {series} placeholder
        #[arg(long)]
        url_template: Option<String>,
    },

    /// List configured series and their source URLs
    Series,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            series,
            output_dir,
            url_template,
        } => {
            let mut config = RunConfig::default();

            if !series.is_empty() {
                config.series = series;
            }

            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            if let Some(template) = url_template {
                if !template.contains("{series}") {
                    anyhow::bail!("URL template must contain a {{series}} placeholder");
                }
                config.url_template = template;
            }

            GenerateCommand::execute(&config)?;
        }
        Commands::Series => {
            SeriesCommand::execute(&RunConfig::default())?;
        }
    }

    Ok(())
}
