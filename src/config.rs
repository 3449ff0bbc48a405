//! Viewer configuration from environment variables.
//!
//! - `ARENA_ASSET_ROOT`: directory holding the PNG sprites (default: "display/images")
//! - `ARENA_REPLAY`: replay JSON to play back (default: "demos/replay.json")
//! - `ARENA_PLAYER_IMAGE`: sprite for the local player (default: "player.png")
//! - `ARENA_FRAME_MS`: milliseconds per replay frame (default: 100)
//! - `ARENA_LOG_PATH`: write logs to this file; unset discards them
//! - `ARENA_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: "info")

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::Level;

use crate::term::AssetTable;
use crate::types::{ASSET_ROOT, DEFAULT_PLAYER_IMAGE};

const DEFAULT_REPLAY: &str = "demos/replay.json";
const DEFAULT_FRAME_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub asset_root: PathBuf,
    pub replay_path: PathBuf,
    pub player_image: String,
    pub frame_ms: u64,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(ASSET_ROOT),
            replay_path: PathBuf::from(DEFAULT_REPLAY),
            player_image: DEFAULT_PLAYER_IMAGE.to_string(),
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source. Blank or unparsable values fall back
    /// to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            asset_root: var("ARENA_ASSET_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_root),
            replay_path: var("ARENA_REPLAY")
                .map(PathBuf::from)
                .unwrap_or(defaults.replay_path),
            player_image: var("ARENA_PLAYER_IMAGE").unwrap_or(defaults.player_image),
            frame_ms: var("ARENA_FRAME_MS")
                .and_then(|s| s.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.frame_ms),
            log_path: var("ARENA_LOG_PATH").map(PathBuf::from),
            log_level: var("ARENA_LOG_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Load the sprite set, including the configured player image.
    pub fn load_assets(&self) -> Result<AssetTable> {
        let assets = AssetTable::load(&self.asset_root)?;
        assets
            .require(&[self.player_image.as_str()])
            .with_context(|| format!("ARENA_PLAYER_IMAGE not found in {}", self.asset_root.display()))?;
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ViewerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ViewerConfig::from_vars(|k| vars.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), ViewerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let c = config(&[
            ("ARENA_ASSET_ROOT", "/tmp/img"),
            ("ARENA_REPLAY", "match.json"),
            ("ARENA_PLAYER_IMAGE", "hero.png"),
            ("ARENA_FRAME_MS", "40"),
            ("ARENA_LOG_PATH", " viewer.log "),
            ("ARENA_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(c.asset_root, PathBuf::from("/tmp/img"));
        assert_eq!(c.replay_path, PathBuf::from("match.json"));
        assert_eq!(c.player_image, "hero.png");
        assert_eq!(c.frame_interval(), Duration::from_millis(40));
        assert_eq!(c.log_path, Some(PathBuf::from("viewer.log")));
        assert_eq!(c.log_level, Level::DEBUG);
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config(&[
            ("ARENA_FRAME_MS", "fast"),
            ("ARENA_LOG_LEVEL", "loud"),
            ("ARENA_LOG_PATH", "   "),
        ]);
        assert_eq!(c.frame_ms, DEFAULT_FRAME_MS);
        assert_eq!(c.log_level, Level::INFO);
        assert_eq!(c.log_path, None);

        assert_eq!(config(&[("ARENA_FRAME_MS", "0")]).frame_ms, DEFAULT_FRAME_MS);
    }
}
