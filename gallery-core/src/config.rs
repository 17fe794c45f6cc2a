//! src/config.rs
//! ============================================================================
//! # Config: Gallery Configuration Loader and Saver
//!
//! The operator sets everything once, before the scan starts: where the media
//! lives, how files are named, how many indices to try, which extensions in
//! which priority, and how many probes may run at once. Nothing here changes
//! at run time.
//!
//! Lookup order:
//! 1. `./gallery.toml`
//! 2. `$XDG_CONFIG_HOME/gallery/config.toml` (or the platform equivalent via
//!    [`directories`](https://docs.rs/directories)); written with defaults
//!    when missing.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! let plan = config.gallery.plan();
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;
use crate::resolver::resolve::{NamePattern, ResolvePlan};

pub const LOCAL_CONFIG_FILE: &str = "gallery.toml";

/// App theme (color scheme) selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,
}

/// What to scan and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory or URL prefix, joined verbatim in front of `prefix`.
    pub base: String,

    /// File stem before the ` (n)` counter.
    pub prefix: String,

    /// Highest index probed; indices run from 1.
    pub max_index: u32,

    /// Priority order: the first extension that exists wins.
    pub extensions: Vec<String>,

    /// Probe workers running at once.
    pub concurrency: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base: "images/".to_string(),
            prefix: "100".to_string(),
            max_index: 44,
            extensions: [
                // still + animated
                "png", "jpg", "jpeg", "gif", "webp", "avif", "svg", "bmp",
                // motion
                "mp4", "webm", "ogv",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
            concurrency: 10,
        }
    }
}

impl GalleryConfig {
    pub fn pattern(&self) -> NamePattern {
        NamePattern::new(self.base.clone(), self.prefix.clone())
    }

    pub fn plan(&self) -> ResolvePlan {
        ResolvePlan {
            pattern: self.pattern(),
            max_index: self.max_index,
            extensions: self.extensions.clone(),
            concurrency: self.concurrency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub theme: Theme,

    /// Rows scrolled per Up/Down in the lightbox; doubled with Shift.
    pub scroll_step: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            scroll_step: 3,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Loads `./gallery.toml` if present, else the XDG config, else writes
    /// and returns defaults.
    pub async fn load() -> Result<Self, AppError> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if TokioFs::try_exists(&local).await.unwrap_or(false) {
            return Self::load_from(&local).await;
        }

        let path = Self::config_path()?;
        if TokioFs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(&path).await?;

            Ok(default_config)
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        info!("Loading config from {}", path.display());
        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text)
    }

    /// Parses, normalizes and validates a TOML document.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let mut cfg: Self = toml::from_str(text)?;
        cfg.normalize();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Saves config as TOML at `path`, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await?;

        Ok(())
    }

    /// Trims extensions, drops a leading dot and blank entries.
    pub fn normalize(&mut self) {
        self.gallery.extensions = self
            .gallery
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.gallery.concurrency == 0 {
            return Err(AppError::invalid_config(
                "gallery.concurrency",
                "must be at least 1",
            ));
        }
        if self.viewer.scroll_step == 0 {
            return Err(AppError::invalid_config(
                "viewer.scroll_step",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "gallery", "gallery").ok_or(AppError::ConfigDir)?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_gallery() {
        let cfg = Config::default();
        assert_eq!(cfg.gallery.base, "images/");
        assert_eq!(cfg.gallery.prefix, "100");
        assert_eq!(cfg.gallery.max_index, 44);
        assert_eq!(cfg.gallery.concurrency, 10);
        assert_eq!(cfg.gallery.extensions.first().map(String::as_str), Some("png"));
        assert_eq!(cfg.gallery.extensions.last().map(String::as_str), Some("ogv"));
        assert_eq!(cfg.viewer.scroll_step, 3);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let cfg = Config::parse(
            r#"
            [gallery]
            max_index = 3
            extensions = [" .PNG ", "mp4", ""]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.gallery.max_index, 3);
        assert_eq!(cfg.gallery.base, "images/");
        assert_eq!(cfg.gallery.extensions, vec!["PNG", "mp4"]);
        assert_eq!(cfg.viewer, ViewerConfig::default());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = Config::parse("[gallery]\nconcurrency = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { ref field, .. } if field == "gallery.concurrency"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse("[gallery\nmax_index = 1"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn plan_carries_pattern_and_limits() {
        let plan = Config::default().gallery.plan();
        assert_eq!(plan.pattern.url_for(1, "png"), "images/100 (1).png");
        assert_eq!(plan.max_index, 44);
        assert_eq!(plan.concurrency, 10);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.gallery.base = "https://media.example/".to_string();
        cfg.viewer.theme = Theme::Dark;
        cfg.save_to(&path).await.unwrap();

        let loaded = Config::load_from(&path).await.unwrap();
        assert_eq!(loaded, cfg);
    }

    #[tokio::test]
    async fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::ConfigIo { path: ref p, .. } if p == &path));
    }
}
