//! Client settings, resolved once at startup.
//!
//! Layers, lowest to highest precedence: built-in default, `shortener.toml` (working directory,
//! then the platform config dir), the `API_BASE` environment variable, and an explicit override
//! passed by the caller (the desktop app forwards `--api-base`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "API_BASE";
pub const SETTINGS_FILE_NAME: &str = "shortener.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base: Option<String>,
}

pub fn load_settings(override_api_base: Option<String>) -> ClientSettings {
    let file_api_base = settings_file_candidates()
        .iter()
        .find_map(|path| match read_settings_file(path) {
            Ok(found) => found,
            Err(err) => {
                warn!("ignoring unreadable settings file: {err:#}");
                None
            }
        })
        .and_then(|file| file.api_base);

    let settings = resolve_settings(
        file_api_base,
        read_non_empty_env_var(API_BASE_ENV),
        override_api_base,
    );
    info!(api_base = %settings.api_base, "resolved client settings");
    settings
}

/// Applies each source over the default; a source holding an invalid URL is skipped.
pub fn resolve_settings(
    file_api_base: Option<String>,
    env_api_base: Option<String>,
    override_api_base: Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    let layers = [
        ("settings file", file_api_base),
        (API_BASE_ENV, env_api_base),
        ("command line", override_api_base),
    ];
    for (source, value) in layers {
        let Some(raw) = value else {
            continue;
        };
        match normalize_api_base(&raw) {
            Ok(api_base) => settings.api_base = api_base,
            Err(err) => warn!(source, value = %raw, "ignoring invalid api base: {err}"),
        }
    }

    settings
}

/// Trims whitespace and trailing slashes, and requires an absolute http(s) URL.
pub fn normalize_api_base(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).with_context(|| format!("'{trimmed}' is not a URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme '{}'", parsed.scheme());
    }
    Ok(trimmed.to_string())
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("url_shortener").join(SETTINGS_FILE_NAME));
    }
    candidates
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<FileSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn defaults_to_local_service() {
        assert_eq!(
            resolve_settings(None, None, None).api_base,
            "http://localhost:8000"
        );
    }

    #[test]
    fn later_sources_take_precedence() {
        let settings = resolve_settings(
            Some("http://file.example".to_string()),
            Some("http://env.example".to_string()),
            None,
        );
        assert_eq!(settings.api_base, "http://env.example");

        let settings = resolve_settings(
            Some("http://file.example".to_string()),
            Some("http://env.example".to_string()),
            Some("https://cli.example:9000".to_string()),
        );
        assert_eq!(settings.api_base, "https://cli.example:9000");
    }

    #[test]
    fn invalid_source_keeps_previous_layer() {
        let settings = resolve_settings(
            Some("http://file.example".to_string()),
            Some("not a url".to_string()),
            Some("ftp://cli.example".to_string()),
        );
        assert_eq!(settings.api_base, "http://file.example");
    }

    #[test]
    fn strips_whitespace_and_trailing_slash() {
        assert_eq!(
            normalize_api_base("  http://localhost:8000/ ").expect("valid"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn reads_api_base_from_settings_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root = env::temp_dir().join(format!("url_shortener_config_test_{suffix}"));
        fs::create_dir_all(&root).expect("create dir");
        let path = root.join(SETTINGS_FILE_NAME);
        fs::write(&path, "api_base = \"http://short.example\"\n").expect("write");

        let parsed = read_settings_file(&path).expect("read").expect("present");
        assert_eq!(parsed.api_base.as_deref(), Some("http://short.example"));
        assert!(read_settings_file(&root.join("missing.toml"))
            .expect("read")
            .is_none());

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root = env::temp_dir().join(format!("url_shortener_bad_config_{suffix}"));
        fs::create_dir_all(&root).expect("create dir");
        let path = root.join(SETTINGS_FILE_NAME);
        fs::write(&path, "api_base = [").expect("write");

        assert!(read_settings_file(&path).is_err());

        fs::remove_dir_all(root).expect("cleanup");
    }
}
