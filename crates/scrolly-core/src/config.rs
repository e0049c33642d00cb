use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storyboard file; the built-in sample is used when unset
    #[serde(default)]
    pub storyboard: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storyboard: None,
            log_level: default_log_level(),
        }
    }
}

/// Tunables for the timeline engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gesture units per frame when a sequence does not set `hold`
    #[serde(default = "default_hold")]
    pub default_hold: u32,
    /// Delay between hiding the old caption and showing the new one
    #[serde(default = "default_caption_reveal_delay")]
    pub caption_reveal_delay_ms: u64,
    /// Delay before a hidden caption block collapses
    #[serde(default = "default_caption_collapse_delay")]
    pub caption_collapse_delay_ms: u64,
    /// Minimum touch travel (px) before a drag counts as one gesture unit
    #[serde(default = "default_touch_dead_zone")]
    pub touch_dead_zone_px: f64,
    /// Viewports narrower than this use continuous (document scroll) mode
    #[serde(default = "default_continuous_breakpoint")]
    pub continuous_breakpoint_px: f64,
    /// Spacer length per frame, in viewport heights
    #[serde(default = "default_frame_track_ratio")]
    pub frame_track_ratio: f64,
    /// Minimum spacer length, in viewport heights
    #[serde(default = "default_min_track_viewports")]
    pub min_track_viewports: f64,
    /// Programmatic scrolls count as settled after this long
    #[serde(default = "default_scroll_settle_timeout")]
    pub scroll_settle_timeout_ms: u64,
    /// Scroll input ignored for this long after a navigation snap
    #[serde(default = "default_snap_cooldown")]
    pub snap_cooldown_ms: u64,
    /// Zero padding of frame numbers in image references
    #[serde(default = "default_image_pad_width")]
    pub image_pad_width: usize,
    /// Image file extension (without the dot)
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_hold: default_hold(),
            caption_reveal_delay_ms: default_caption_reveal_delay(),
            caption_collapse_delay_ms: default_caption_collapse_delay(),
            touch_dead_zone_px: default_touch_dead_zone(),
            continuous_breakpoint_px: default_continuous_breakpoint(),
            frame_track_ratio: default_frame_track_ratio(),
            min_track_viewports: default_min_track_viewports(),
            scroll_settle_timeout_ms: default_scroll_settle_timeout(),
            snap_cooldown_ms: default_snap_cooldown(),
            image_pad_width: default_image_pad_width(),
            image_extension: default_image_extension(),
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.default_hold == 0 {
            return Err(crate::Error::Config("default_hold must be at least 1".into()));
        }
        if !(self.touch_dead_zone_px >= 0.0) {
            return Err(crate::Error::Config(
                "touch_dead_zone_px must be non-negative".into(),
            ));
        }
        if !(self.frame_track_ratio > 0.0 && self.frame_track_ratio.is_finite()) {
            return Err(crate::Error::Config(
                "frame_track_ratio must be a positive number".into(),
            ));
        }
        // a full traverse must scroll at least two screens
        if !(self.min_track_viewports >= 2.0 && self.min_track_viewports.is_finite()) {
            return Err(crate::Error::Config(
                "min_track_viewports must be at least 2".into(),
            ));
        }
        if !(self.continuous_breakpoint_px >= 0.0) {
            return Err(crate::Error::Config(
                "continuous_breakpoint_px must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Tick rate while a tween, timer or page scroll is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixels represented by one terminal row
    #[serde(default = "default_row_px")]
    pub row_px: f64,
    /// Duration of a smooth page scroll
    #[serde(default = "default_smooth_scroll_ms")]
    pub smooth_scroll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            row_px: default_row_px(),
            smooth_scroll_ms: default_smooth_scroll_ms(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrolly")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_hold() -> u32 {
    3
}

fn default_caption_reveal_delay() -> u64 {
    200
}

fn default_caption_collapse_delay() -> u64 {
    260
}

fn default_touch_dead_zone() -> f64 {
    6.0
}

fn default_continuous_breakpoint() -> f64 {
    900.0
}

fn default_frame_track_ratio() -> f64 {
    0.12
}

fn default_min_track_viewports() -> f64 {
    2.0
}

fn default_scroll_settle_timeout() -> u64 {
    900
}

fn default_snap_cooldown() -> u64 {
    120
}

fn default_image_pad_width() -> usize {
    4
}

fn default_image_extension() -> String {
    "png".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_row_px() -> f64 {
    16.0
}

fn default_smooth_scroll_ms() -> u64 {
    300
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            config.engine.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrolly/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrolly")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the terminal stage is active
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("scrolly.log")
    }

    /// Get the configured storyboard path (with tilde expansion)
    pub fn storyboard_path(&self) -> Option<PathBuf> {
        self.general.storyboard.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_hold, 3);
        assert_eq!(config.caption_reveal_delay_ms, 200);
        assert_eq!(config.caption_collapse_delay_ms, 260);
        assert!((config.touch_dead_zone_px - 6.0).abs() < f64::EPSILON);
        assert_eq!(config.image_pad_width, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [engine]
            default_hold = 5

            [ui]
            row_px = 20.0
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.default_hold, 5);
        assert_eq!(config.engine.snap_cooldown_ms, 120);
        assert!((config.ui.row_px - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_zero_hold_rejected() {
        let config = EngineConfig {
            default_hold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_track_rejected() {
        let config = EngineConfig {
            min_track_viewports: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            min_track_viewports: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_track_ratio_rejected() {
        for ratio in [f64::NAN, f64::INFINITY, 0.0, -0.1] {
            let config = EngineConfig {
                frame_track_ratio: ratio,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "ratio {ratio} accepted");
        }
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.engine, config.engine);
    }
}
