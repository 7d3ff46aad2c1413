use clap::Parser;

/// Default location of the baby-tracker database, relative to the
/// directory the importer is run from.
pub const DEFAULT_DB_PATH: &str = "data/baby-tracker.db";

/// Default spreadsheet filename holding the historical measurements.
pub const DEFAULT_SOURCE_PATH: &str = "Ask historisk data.xlsx";

/// Command-line interface definition for weight-importer
/// One-shot CLI to append historical weight measurements to the events table
#[derive(Parser)]
#[command(
    name = "weight-importer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import historical weight measurements from a spreadsheet into the baby-tracker events table",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db", default_value = DEFAULT_DB_PATH)]
    pub db: String,

    /// Override spreadsheet path (useful for tests)
    #[arg(long = "file", default_value = DEFAULT_SOURCE_PATH)]
    pub file: String,
}
