use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or
/// `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume applied at startup, clamped to [0, 1].
    pub default_volume: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            default_volume: 0.7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Transport tick: how often the backend reports playback position
    /// (milliseconds). Must be >= 1.
    pub tick_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { tick_ms: 200 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when seeking backward/forward.
    pub scrub_seconds: u64,
    /// Volume change per keypress.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which main pane to show at startup.
    pub initial_view: ViewSetting,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_view: ViewSetting::Home,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ViewSetting {
    Home,
    Search,
    #[serde(alias = "your-library")]
    Library,
}
