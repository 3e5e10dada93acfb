use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration key holding the provider API key.
pub const API_KEY: &str = "MANDRILL_API_KEY";

/// Configuration key holding the sender address.
pub const FROM_EMAIL: &str = "MANDRILL_FROM_EMAIL";

/// Configuration key holding the base URL of the password-reset page.
/// Consumed by the smoke-send binary when building reset links.
pub const PASSWORD_RESET_URL: &str = "PASSWORD_RESET_URL";

/// Read a flat `KEY=VALUE` configuration file into a fresh map.
///
/// Blank lines and lines starting with `#` are ignored, lines without a
/// `=` are silently skipped, and whitespace around keys and values is
/// trimmed. The first `=` is the delimiter, so values may themselves
/// contain `=`. A missing file is not an error: it yields an empty map.
///
/// The file is re-read on every call so edits take effect without
/// restarting the process.
pub fn read_env_file(path: &Path) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return values,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    values
}

/// Construction-time settings for the email dispatcher.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the flat `KEY=VALUE` configuration store.
    pub env_file: PathBuf,
    /// Directory holding the HTML email templates.
    pub templates_dir: PathBuf,
    /// Provider endpoint receiving send requests.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            templates_dir: default_templates_dir(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("email-templates")
}

fn default_api_url() -> String {
    "https://mandrillapp.com/api/1.0/messages/send.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
