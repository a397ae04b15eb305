use crate::config::toml_config::CatalogConfig;
use crate::core::catalog::Catalog;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "journal-catalog")]
#[command(about = "Positional in-memory catalog of journals and scientific articles")]
pub struct CliConfig {
    /// TOML catalog to seed from; the built-in demo catalog is used when absent
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Journals,
    Articles,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every record in positional order
    List {
        #[arg(long, value_enum, default_value = "journals")]
        kind: RecordKind,
        /// Sort the printed snapshot by natural order (the catalog itself is not reordered)
        #[arg(long)]
        sort: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the record at a position
    Show {
        #[arg(long, value_enum, default_value = "journals")]
        kind: RecordKind,
        index: usize,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Remove the record at a position and print what remains
    Remove {
        #[arg(long, value_enum, default_value = "journals")]
        kind: RecordKind,
        index: usize,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Seed the demo catalog, print journal 3 and remove journal 4
    Demo,
}

impl CliConfig {
    /// `demo` always uses the built-in catalog; other commands read `--config`
    /// when given.
    pub fn load_catalog(&self, today: NaiveDate) -> Result<Catalog> {
        match (&self.command, &self.config) {
            (Command::Demo, _) | (_, None) => Catalog::demo(today),
            (_, Some(path)) => {
                tracing::info!("📁 Loading catalog from: {}", path.display());
                let config = CatalogConfig::from_file(path)?;
                Catalog::from_config(&config, today)
            }
        }
    }
}
