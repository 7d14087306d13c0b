use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for popgrid
#[derive(Parser, Debug)]
#[command(version, about = "Browse population data as a sortable, searchable table")]
pub struct Args {
    /// Population API response (JSON with a top-level "data" array)
    pub path: PathBuf,

    /// Sort by column key (label, year or value)
    #[arg(long = "sort")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long = "desc", action, requires = "sort")]
    pub desc: bool,

    /// Only show rows containing this text (case-insensitive)
    #[arg(long = "search")]
    pub search: Option<String>,

    /// Page to show (default: 1)
    #[arg(long = "page")]
    pub page: Option<usize>,

    /// Rows per page; overrides the config file
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Geography to show. "Nation" shows every entry.
    #[arg(long = "geography", default_value = "Nation")]
    pub geography: String,

    /// Year to show. "latest" picks the most recent year in the data.
    #[arg(long = "year", default_value = "latest")]
    pub year: String,

    /// Table config file (JSON)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long = "verbose", short = 'v', action)]
    pub verbose: bool,
}
