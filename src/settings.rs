//! Game rules and pacing
//!
//! Loaded from an optional JSON file; missing keys take the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sim::body::Field;

/// Settings errors
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable game rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Fixed tick period
    pub tick_interval_ms: u64,

    // === Game start ===
    pub starting_lives: u32,
    /// Big rocks placed on a new game
    pub starting_rocks: u32,

    // === Difficulty ===
    /// Seconds between timed rock spawns at the start of a game
    pub spawn_interval_secs: f32,
    /// Taken off the spawn interval on each bonus life
    pub difficulty_step_secs: f32,
    pub min_spawn_interval_secs: f32,

    // === Scoring ===
    /// Score step between bonus lives
    pub bonus_life_score: u64,
    /// Multiplied by the rock tier ordinal
    pub base_rock_score: u64,

    // === Input ===
    /// Held fire shoots once every this many ticks
    pub fire_interval_ticks: u32,
    /// Minimum time between accepted menu cursor moves
    pub menu_debounce_ms: u64,

    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            tick_interval_ms: 30,

            starting_lives: 3,
            starting_rocks: 5,

            spawn_interval_secs: 20.0,
            difficulty_step_secs: 4.0,
            min_spawn_interval_secs: 2.0,

            bonus_life_score: 10_000,
            base_rock_score: 100,

            fire_interval_ticks: 5,
            menu_debounce_ms: 100,

            seed: None,
        }
    }
}

impl Settings {
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn menu_debounce_secs(&self) -> f32 {
        self.menu_debounce_ms as f32 / 1000.0
    }

    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Could not load settings from {}: {}; using defaults",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_width <= 0.0 {
            return invalid("field_width", "must be positive");
        }
        if self.field_height <= 0.0 {
            return invalid("field_height", "must be positive");
        }
        if self.tick_interval_ms == 0 {
            return invalid("tick_interval_ms", "must be non-zero");
        }
        if self.fire_interval_ticks == 0 {
            return invalid("fire_interval_ticks", "must be non-zero");
        }
        if self.min_spawn_interval_secs <= 0.0 {
            return invalid("min_spawn_interval_secs", "must be positive");
        }
        if self.spawn_interval_secs < self.min_spawn_interval_secs {
            return invalid("spawn_interval_secs", "must not be below the minimum");
        }
        if self.difficulty_step_secs < 0.0 {
            return invalid("difficulty_step_secs", "must not be negative");
        }
        if self.bonus_life_score == 0 {
            return invalid("bonus_life_score", "must be non-zero");
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
    Err(SettingsError::Invalid { field, reason })
}
