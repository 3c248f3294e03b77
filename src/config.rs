use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Careline";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the clinic records service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default per-request timeout for record fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing directive when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Careline/ on all platforms (user-visible, matches the desktop build)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Careline")
}

/// Where display preferences are persisted between sessions.
pub fn preferences_path() -> PathBuf {
    app_data_dir().join("preferences.json")
}
