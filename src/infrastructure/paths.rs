//! Path utilities for the Zellij plugin sandbox, where the host filesystem
//! is mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory holding the plugin's log files.
///
/// Located at `/host/.local/share/zellij/autocomplete` in the sandbox. `/host`
/// points to the cwd of the last focused terminal, or the folder Zellij was
/// started in, which usually makes this `~/.local/share/zellij/autocomplete`.
///
/// ```
/// use autocomplete::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/autocomplete"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("autocomplete")
}

/// Expands a leading `~` to the sandbox `/host` prefix.
///
/// ```
/// use autocomplete::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
