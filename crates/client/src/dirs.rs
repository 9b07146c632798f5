//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Platform-specific log directory for `dex`.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/dex/logs`
/// - Linux: `~/.cache/dex/logs` (or `$XDG_CACHE_HOME/dex/logs`)
/// - Windows: `%LOCALAPPDATA%\dex\logs`
/// - Fallback: `/tmp/dex/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dex")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dex"))
        .join("logs")
}
