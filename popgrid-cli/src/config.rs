//! Table config loading and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use popgrid_lib::config::TableConfig;

use crate::cli::Args;
use crate::paths;

const DEFAULT_TITLE: &str = "Data Table";

/// Load the table config.
///
/// An explicit path must exist. Without one, the user config file is used if
/// present, otherwise defaults.
pub fn load(path: Option<&Path>) -> Result<TableConfig> {
    if let Some(path) = path {
        return read(path);
    }
    match paths::default_config() {
        Some(path) if path.exists() => read(&path),
        _ => Ok(TableConfig::default().with_title(DEFAULT_TITLE)),
    }
}

fn read(path: &Path) -> Result<TableConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = TableConfig::from_json_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    log::debug!("Loaded table config from {}", path.display());
    Ok(config)
}

/// Apply command-line flags on top of a loaded config.
pub fn apply_args(mut config: TableConfig, args: &Args) -> TableConfig {
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }
    if args.search.is_some() {
        config = config.searchable(true);
    }
    config
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Population", "page_size": 5}}"#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.title.as_deref(), Some("Population"));
        assert_eq!(config.page_size, Some(5));
        assert_eq!(config.empty_message, "No data available");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from(["popgrid", "data.json", "--page-size", "20", "--search", "ohio"]);
        let config = apply_args(TableConfig::default().with_page_size(5), &args);
        assert_eq!(config.page_size, Some(20));
        assert!(config.searchable);
    }
}
