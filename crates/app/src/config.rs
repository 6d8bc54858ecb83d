use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::held::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::Difficulty;

// Runtime settings (not gameplay tuning).

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub save_dir: PathBuf,
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub encounters_path: PathBuf,
    pub seed: u32,
    /// Difficulty for the standalone shooter.
    pub difficulty: Difficulty,
    pub log_file: PathBuf,
    pub key_release_ms: u32,
}

impl AppConfig {
    /// Read `SPACE_COWBOY_*` variables. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            save_dir: path("SPACE_COWBOY_SAVE_DIR", "saves"),
            data_dir: path("SPACE_COWBOY_DATA_DIR", "data"),
            assets_dir: path("SPACE_COWBOY_ASSETS_DIR", "assets/images"),
            encounters_path: path("SPACE_COWBOY_ENCOUNTERS", "config/encounters.json"),
            seed: get("SPACE_COWBOY_SEED")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_else(time_seed),
            difficulty: get("SPACE_COWBOY_DIFFICULTY")
                .and_then(|v| Difficulty::from_str(v.trim()))
                .unwrap_or(Difficulty::Hard),
            log_file: path("SPACE_COWBOY_LOG", "space-cowboy.log"),
            key_release_ms: get("SPACE_COWBOY_KEY_RELEASE_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }
}

fn time_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    nanos.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[("SPACE_COWBOY_SEED", "7")]);
        assert_eq!(cfg.save_dir, PathBuf::from("saves"));
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.assets_dir, PathBuf::from("assets/images"));
        assert_eq!(cfg.encounters_path, PathBuf::from("config/encounters.json"));
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.log_file, PathBuf::from("space-cowboy.log"));
        assert_eq!(cfg.key_release_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
        assert_eq!(cfg.seed, 7);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config(&[
            ("SPACE_COWBOY_SAVE_DIR", "/tmp/s"),
            ("SPACE_COWBOY_DIFFICULTY", "Easy"),
            ("SPACE_COWBOY_KEY_RELEASE_MS", "350"),
        ]);
        assert_eq!(cfg.save_dir, PathBuf::from("/tmp/s"));
        assert_eq!(cfg.difficulty, Difficulty::Easy);
        assert_eq!(cfg.key_release_ms, 350);
    }

    #[test]
    fn garbage_values_fall_back() {
        let cfg = config(&[
            ("SPACE_COWBOY_DIFFICULTY", "nightmare"),
            ("SPACE_COWBOY_KEY_RELEASE_MS", "soon"),
            ("SPACE_COWBOY_DATA_DIR", "  "),
        ]);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.key_release_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert!(cfg.seed > 0);
    }
}
