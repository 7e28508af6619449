// src/config.rs
use std::{env, fs};

use serde::Deserialize;
use tracing::warn;

use crate::data_types::SourceOption;

const CONFIG_FILE: &str = "viewer.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub default_csv: String,
    pub snapshots: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://127.0.0.1:8080".into(),
            default_csv: "default.csv".into(),
            snapshots: Vec::new(),
        }
    }
}

impl Config {
    fn from_toml(raw: &str) -> Option<Config> {
        match toml::from_str(raw) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!("ignoring malformed {CONFIG_FILE}: {err}");
                None
            }
        }
    }

    pub fn snapshot_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    // The selectable origins at startup: the default snapshot first,
    // then the configured named snapshots. Uploads are appended to this
    // list at runtime.
    pub fn source_options(&self) -> Vec<SourceOption> {
        let mut options = vec![SourceOption::remote(
            "Default",
            self.snapshot_url(&self.default_csv),
        )];
        for name in &self.snapshots {
            options.push(SourceOption::remote(name, self.snapshot_url(name)));
        }
        options
    }
}

// Defaults, overlaid by viewer.toml if present, overlaid by environment
pub fn load() -> Config {
    let mut config = fs::read_to_string(CONFIG_FILE)
        .ok()
        .and_then(|raw| Config::from_toml(&raw))
        .unwrap_or_default();

    if let Ok(v) = env::var("RECORD_VIEWER_BASE_URL") {
        config.base_url = v;
    }
    if let Ok(v) = env::var("RECORD_VIEWER_DEFAULT_CSV") {
        config.default_csv = v;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::SourceKind;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config = Config::from_toml("base_url = \"https://scores.example.net\"")
            .expect("parse config");
        assert_eq!(config.base_url, "https://scores.example.net");
        assert_eq!(config.default_csv, "default.csv");
        assert!(config.snapshots.is_empty());
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(Config::from_toml("base_url = [broken").is_none());
    }

    #[test]
    fn snapshot_url_joins_without_doubling_slashes() {
        let config = Config {
            base_url: "http://localhost:9000/".into(),
            ..Config::default()
        };
        assert_eq!(
            config.snapshot_url("week1.csv"),
            "http://localhost:9000/week1.csv"
        );
    }

    #[test]
    fn source_options_list_default_then_snapshots() {
        let config = Config::from_toml(
            "base_url = \"http://localhost:9000\"\nsnapshots = [\"week1.csv\", \"week2.csv\"]",
        )
        .expect("parse config");

        let options = config.source_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Default");
        assert_eq!(
            options[0].kind,
            SourceKind::Remote("http://localhost:9000/default.csv".into())
        );
        assert_eq!(options[1].label, "week1.csv");
        assert_eq!(options[2].label, "week2.csv");
    }
}
