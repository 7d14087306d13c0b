mod cli;
mod config;
mod paths;
mod population;
mod render;

use std::fs;
use std::fs::File;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use popgrid_lib::table::{PageChange, SortDirection, Table};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::cli::Args;

/// Log to `latest.log` in the cache directory, or to stderr if there is none.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = paths::log_file().and_then(|path| {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        File::create(path).ok()
    });

    let result = match log_file {
        Some(file) => WriteLogger::init(level, Config::default(), file),
        None => TermLogger::init(
            LevelFilter::Warn.max(level),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn build_table(args: &Args) -> Result<Table> {
    let config = config::apply_args(config::load(args.config.as_deref())?, args);

    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let entries = population::parse(&text)?;
    let entries = population::filter_geography(entries, &args.geography);
    let entries = population::filter_year(entries, &args.year);
    log::info!(
        "Loaded {} entries for {} ({})",
        entries.len(),
        args.geography,
        args.year
    );

    let table = Table::with_rows(population::columns(), population::to_rows(&entries))
        .with_config(config);

    if let Some(key) = &args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        table
            .set_sort(key, direction)
            .with_context(|| format!("Cannot sort by '{}'", key))?;
    }
    if let Some(query) = &args.search {
        table.set_search(query);
    }
    if let Some(page) = args.page
        && page != 1
        && table.go_to_page(page) == PageChange::Unchanged
    {
        log::warn!("Page {} is not available, showing page 1", page);
    }

    Ok(table)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = build_table(&args)?;
    println!("{}", render::render(&table.view()));
    Ok(())
}
