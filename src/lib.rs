//! weight-importer library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::Cli;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    ImportLogic::apply(&cli.db, &cli.file)
}
