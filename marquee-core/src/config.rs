//! Page configuration loading
//!
//! Every section is optional in files; missing values fall back to the
//! defaults in [`crate::constants`].

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::card_stack::CardStackConfig;
use crate::error::ConfigError;
use crate::loading::LoadingConfig;
use crate::nav::NavConfig;
use crate::newsletter::NewsletterConfig;
use crate::page::PageLayout;
use crate::particles::ParticleConfig;
use crate::reveal::RevealConfig;
use crate::scroll::ScrollConfig;
use crate::slider::SliderConfig;
use crate::theme::ThemeConfig;
use crate::toast::ToastConfig;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG_PATH";
/// Environment variable holding inline JSON config.
pub const CONFIG_JSON_ENV: &str = "MARQUEE_CONFIG_JSON";

/// Source that produced the page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub card_stack: CardStackConfig,
    pub slider: SliderConfig,
    pub toast: ToastConfig,
    pub theme: ThemeConfig,
    pub loading: LoadingConfig,
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub newsletter: NewsletterConfig,
    pub particles: ParticleConfig,
    /// Elements present on the page.
    pub layout: PageLayout,
}

impl PageConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$MARQUEE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MARQUEE_CONFIG_JSON` (inline JSON),
    /// 3) `marquee.toml`, `marquee.json` or `config/marquee.toml` in the
    ///    working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)?,
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| ConfigError::Parse {
                    origin: origin.clone(),
                    toml: err.to_string(),
                    json: "not attempted".to_string(),
                })?
            }
            _ => Self::parse_from_str(&contents, &origin)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).or_else(|toml_err: toml::de::Error| {
            serde_json::from_str(contents).map_err(|json_err| ConfigError::Parse {
                origin: origin.to_string(),
                toml: toml_err.to_string(),
                json: json_err.to_string(),
            })
        })
    }

    pub fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
            origin: "inline json".to_string(),
            toml: "not attempted".to_string(),
            json: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall timers or make thresholds meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations: [(&'static str, u64); 9] = [
            ("card_stack.auto_advance_ms", self.card_stack.auto_advance_ms),
            ("card_stack.animation_lock_ms", self.card_stack.animation_lock_ms),
            ("slider.auto_slide_ms", self.slider.auto_slide_ms),
            ("toast.duration_ms", self.toast.duration_ms),
            ("theme.button_animation_ms", self.theme.button_animation_ms),
            ("loading.visible_ms", self.loading.visible_ms),
            ("loading.fade_ms", self.loading.fade_ms),
            ("nav.login_redirect_ms", self.nav.login_redirect_ms),
            ("newsletter.submit_delay_ms", self.newsletter.submit_delay_ms),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "duration must be greater than zero".to_string(),
                });
            }
        }

        let swipe = self.card_stack.swipe_threshold_px;
        if swipe.is_nan() || swipe <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "card_stack.swipe_threshold_px",
                reason: format!("must be positive, got {swipe}"),
            });
        }

        let ratios: [(&'static str, f32); 4] = [
            ("reveal.section_threshold", self.reveal.section_threshold),
            ("reveal.image_threshold", self.reveal.image_threshold),
            ("reveal.stats_threshold", self.reveal.stats_threshold),
            (
                "reveal.entry_animation_threshold",
                self.reveal.entry_animation_threshold,
            ),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be within [0, 1], got {value}"),
                });
            }
        }

        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["marquee.toml", "marquee.json", "config/marquee.toml"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
