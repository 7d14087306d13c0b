//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "popgrid";
const APPLICATION: &str = "popgrid";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/popgrid` or `~/.cache/popgrid`
/// - macOS: `~/Library/Caches/dev.popgrid.popgrid`
/// - Windows: `C:\Users\<User>\AppData\Local\popgrid\popgrid\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Get the path to the default table config.
pub fn default_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("table.json"))
}
