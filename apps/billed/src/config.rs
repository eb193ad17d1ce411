use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

pub const SETTINGS_FILE: &str = "billed.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub storage_path: String,
    pub log_filter: String,
    pub http_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5678/".into(),
            storage_path: "./data/local_storage.json".into(),
            log_filter: "info".into(),
            http_timeout_seconds: 30,
        }
    }
}

/// Settings plus the problems met while loading them, to be logged once the
/// subscriber is installed.
pub fn load_settings() -> (Settings, Vec<String>) {
    load_settings_with(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment overrides.
pub fn load_settings_with(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let mut problems = Vec::new();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_url") {
                    settings.api_url = v.clone();
                }
                if let Some(v) = file_cfg.get("storage_path") {
                    settings.storage_path = v.clone();
                }
                if let Some(v) = file_cfg.get("log") {
                    settings.log_filter = v.clone();
                }
                if let Some(v) = file_cfg.get("http_timeout_seconds") {
                    set_timeout(&mut settings, v, &mut problems);
                }
            }
            Err(err) => problems.push(format!(
                "ignoring malformed settings file '{}': {err}",
                file.display()
            )),
        }
    }

    if let Some(v) = env("BILLED_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("BILLED_STORAGE_PATH") {
        settings.storage_path = v;
    }
    if let Some(v) = env("APP__STORAGE_PATH") {
        settings.storage_path = v;
    }

    if let Some(v) = env("BILLED_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = env("APP__HTTP_TIMEOUT_SECONDS") {
        set_timeout(&mut settings, &v, &mut problems);
    }

    settings.api_url = normalize_api_url(&settings.api_url);
    (settings, problems)
}

fn set_timeout(settings: &mut Settings, raw: &str, problems: &mut Vec<String>) {
    match raw.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => settings.http_timeout_seconds = parsed,
        _ => problems.push(format!("ignoring invalid http timeout '{raw}'")),
    }
}

pub fn normalize_api_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return Settings::default().api_url;
    }
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_and_env_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (settings, problems) = load_settings_with(&dir.path().join("billed.toml"), env_of(&[]));
        assert_eq!(settings, Settings::default());
        assert!(problems.is_empty());
    }

    #[test]
    fn file_values_then_env_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("billed.toml");
        fs::write(
            &file,
            "api_url = \"http://api.billed.test\"\nstorage_path = \"/tmp/ls.json\"\nlog = \"debug\"\nhttp_timeout_seconds = \"5\"\n",
        )
        .expect("write settings");

        let (from_file, problems) = load_settings_with(&file, env_of(&[]));
        assert!(problems.is_empty());
        assert_eq!(from_file.api_url, "http://api.billed.test/");
        assert_eq!(from_file.storage_path, "/tmp/ls.json");
        assert_eq!(from_file.log_filter, "debug");
        assert_eq!(from_file.http_timeout_seconds, 5);

        let (overridden, problems) = load_settings_with(
            &file,
            env_of(&[
                ("BILLED_API_URL", "http://first/"),
                ("APP__API_URL", "http://second"),
                ("BILLED_LOG", "warn"),
                ("APP__HTTP_TIMEOUT_SECONDS", "nope"),
            ]),
        );
        assert_eq!(overridden.api_url, "http://second/");
        assert_eq!(overridden.log_filter, "warn");
        assert_eq!(overridden.http_timeout_seconds, 5);
        assert_eq!(problems, vec!["ignoring invalid http timeout 'nope'".to_string()]);
    }

    #[test]
    fn malformed_file_is_reported_and_defaults_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("billed.toml");
        fs::write(&file, "api_url = [1, 2").expect("write settings");

        let (settings, problems) = load_settings_with(&file, env_of(&[]));

        assert_eq!(settings, Settings::default());
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("ignoring malformed settings file"));
    }

    #[test]
    fn blank_api_url_falls_back_to_default() {
        assert_eq!(normalize_api_url("  "), "http://localhost:5678/");
        assert_eq!(normalize_api_url("http://x/api"), "http://x/api/");
    }
}
