// config.rs - Settings for the panel show

use std::path::Path;
use std::time::Duration;

use led_panel::{Diagnostic, EffectKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ShowError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub panel: PanelConfig,
    pub life: LifeConfig,
    pub timing: TimingConfig,

    /// End-of-game effects, picked from uniformly.
    pub effects: Vec<EffectKind>,

    /// Start on a wiring diagnostic instead of a game.
    pub diagnostic: Option<Diagnostic>,

    /// Fixed seed for reproducible shows; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            life: LifeConfig::default(),
            timing: TimingConfig::default(),
            effects: EffectKind::ALL.to_vec(),
            diagnostic: None,
            seed: None,
        }
    }
}

/// Tile arrangement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub devices_wide: u8,
    pub devices_high: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            devices_wide: 4,
            devices_high: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub wrap: bool,
    pub max_generations: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            max_generations: conway::DEFAULT_MAX_GENERATIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between generations.
    pub life_tick_ms: u64,
    /// Dark pause after an end-of-game effect.
    pub end_pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            life_tick_ms: 333,
            end_pause_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn life_tick(&self) -> Duration {
        Duration::from_millis(self.life_tick_ms)
    }

    pub fn end_pause(&self) -> Duration {
        Duration::from_millis(self.end_pause_ms)
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ShowError> {
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShowError> {
        if self.timing.life_tick_ms == 0 {
            warn!("life_tick_ms is 0, generations will run unpaced");
        }
        if self.panel.devices_wide == 0 || self.panel.devices_high == 0 {
            return Err(ShowError::Config(format!(
                "panel must have at least one tile, got {}x{}",
                self.panel.devices_wide, self.panel.devices_high
            )));
        }
        if self.effects.is_empty() {
            return Err(ShowError::Config("at least one end effect is required".to_owned()));
        }
        Ok(())
    }
}
