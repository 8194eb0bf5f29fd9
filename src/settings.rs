//! Runner settings
//!
//! Loaded from a JSON file; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::error::SettingsError;
use crate::sim::BoonType;

/// Headless session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed
    pub seed: u64,
    /// Simulated seconds before the session stops
    pub run_seconds: f32,
    /// Camera view size (world units)
    pub view_width: f32,
    pub view_height: f32,
    /// Length of one rendered frame fed to the fixed-step loop
    pub frame_dt: f32,
    /// Frame time clamp (avoids a spiral of death after a stall)
    pub max_frame_dt: f32,
    /// Autopilot boon preference, most wanted first
    pub boon_priority: Vec<BoonType>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            run_seconds: 300.0,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            frame_dt: 1.0 / 60.0,
            max_frame_dt: 0.1,
            boon_priority: vec![
                BoonType::Damage,
                BoonType::AttackSpeed,
                BoonType::Area,
                BoonType::MaxHealth,
                BoonType::CritChance,
                BoonType::MoveSpeed,
                BoonType::PickupRange,
                BoonType::XpGain,
            ],
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("run_seconds", self.run_seconds),
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("frame_dt", self.frame_dt),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Rank of `boon` in the autopilot preference (lower is better)
    pub fn boon_rank(&self, boon: BoonType) -> usize {
        self.boon_priority
            .iter()
            .position(|b| *b == boon)
            .unwrap_or(self.boon_priority.len())
    }
}
