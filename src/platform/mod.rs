// FishBrowser platform paths
// Resolves the per-user data directory the store writes into.
//
// - **Linux**: `$XDG_DATA_HOME/FishBrowser` or `~/.local/share/FishBrowser`
// - **macOS**: `~/Library/Application Support/FishBrowser`
// - **Windows**: `%APPDATA%\FishBrowser`

use std::path::PathBuf;

/// Folder name used under the platform data directory.
pub const APP_DIR_NAME: &str = "FishBrowser";

/// Returns the platform data directory for FishBrowser.
///
/// Falls back to the system temp directory when the platform reports no
/// data directory (e.g. no home directory in a sandbox).
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
