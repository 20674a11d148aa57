//! Runtime configuration.
//!
//! Precedence per field: `MEALTIME_*` environment variables > config files
//! > built-in defaults. Candidate files are read in order (explicit path,
//! `$MEALTIME_CONFIG`, `~/.config/mealtime.toml`, `./mealtime.toml`), with
//! the first file to set a field winning.
//!
//! Only the non-secret connection identity may live in a file. The account
//! password comes from `MEALTIME_PASSWORD` or interactive entry in the
//! embedding application.

use crate::credentials::Credentials;
use crate::transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RESULTS_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data API base URL, without the per-app path.
    pub base_url: String,
    /// Fixed page size for the session.
    pub results_per_page: u64,
    pub timeout_secs: u64,
    /// Connection identity; the password is supplied separately.
    pub app_id: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            app_id: None,
            database: None,
            collection: None,
            email: None,
        }
    }
}

/// File-level view where every field is optional, so several candidate
/// files can be merged first-hit-wins.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    results_per_page: Option<u64>,
    timeout_secs: Option<u64>,
    app_id: Option<String>,
    database: Option<String>,
    collection: Option<String>,
    email: Option<String>,
}

impl FileConfig {
    fn merge(&mut self, other: FileConfig) {
        if self.base_url.is_none() {
            self.base_url = other.base_url;
        }
        if self.results_per_page.is_none() {
            self.results_per_page = other.results_per_page;
        }
        if self.timeout_secs.is_none() {
            self.timeout_secs = other.timeout_secs;
        }
        if self.app_id.is_none() {
            self.app_id = other.app_id;
        }
        if self.database.is_none() {
            self.database = other.database;
        }
        if self.collection.is_none() {
            self.collection = other.collection;
        }
        if self.email.is_none() {
            self.email = other.email;
        }
    }
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(None)
    }

    #[must_use]
    pub fn load_from(explicit: Option<&Path>) -> Self {
        let mut file = FileConfig::default();
        for path in candidate_paths(explicit) {
            if !path.exists() {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|s| toml::from_str::<FileConfig>(&s).map_err(|e| e.to_string()));
            match parsed {
                Ok(cfg) => file.merge(cfg),
                Err(e) => warn!("ignoring config file {}: {e}", path.display()),
            }
        }

        let mut cfg = Self::default();
        if let Some(v) = file.base_url {
            cfg.base_url = v;
        }
        if let Some(v) = file.results_per_page {
            cfg.results_per_page = v;
        }
        if let Some(v) = file.timeout_secs {
            cfg.timeout_secs = v;
        }
        cfg.app_id = file.app_id;
        cfg.database = file.database;
        cfg.collection = file.collection;
        cfg.email = file.email;

        apply_env(&mut cfg);
        cfg
    }

    /// Assemble a full credential set, if the connection identity is
    /// configured.
    #[must_use]
    pub fn credentials(&self, password: &str) -> Option<Credentials> {
        Some(Credentials::new(
            self.app_id.clone()?,
            self.database.clone()?,
            self.collection.clone()?,
            self.email.clone()?,
            password,
        ))
    }
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("MEALTIME_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Some(dir) = dirs_next::config_dir() {
        paths.push(dir.join("mealtime.toml"));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("mealtime.toml"));
    }
    paths
}

fn apply_env(cfg: &mut Config) {
    if let Ok(v) = std::env::var("MEALTIME_BASE_URL") {
        cfg.base_url = v;
    }
    if let Ok(v) = std::env::var("MEALTIME_RESULTS_PER_PAGE") {
        match v.parse() {
            Ok(n) => cfg.results_per_page = n,
            Err(_) => warn!("ignoring non-numeric MEALTIME_RESULTS_PER_PAGE"),
        }
    }
    if let Ok(v) = std::env::var("MEALTIME_TIMEOUT_SECS") {
        match v.parse() {
            Ok(n) => cfg.timeout_secs = n,
            Err(_) => warn!("ignoring non-numeric MEALTIME_TIMEOUT_SECS"),
        }
    }
    if let Ok(v) = std::env::var("MEALTIME_APP_ID") {
        cfg.app_id = Some(v);
    }
    if let Ok(v) = std::env::var("MEALTIME_DATABASE") {
        cfg.database = Some(v);
    }
    if let Ok(v) = std::env::var("MEALTIME_COLLECTION") {
        cfg.collection = Some(v);
    }
    if let Ok(v) = std::env::var("MEALTIME_EMAIL") {
        cfg.email = Some(v);
    }
}
