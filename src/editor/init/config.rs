use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};
use crate::export::MAX_CELL_SIZE_PX;
use crate::systems::wave::WaveTiming;

/// Tunables of the board. Every field is optional in JSON and falls back to
/// the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Start delay added per BFS hop from the seed.
    pub per_hop_delay_ms: f64,
    pub transition_ms: f64,
    /// Length of the seed's 1 → 1.2 → 1 emphasis pulse.
    pub pulse_ms: f64,
    /// Periodic full-board save; `0` disables it.
    pub autosave_interval_ms: f64,
    /// Side of one cell in exported images, `1..=MAX_CELL_SIZE_PX`.
    pub cell_size_px: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            per_hop_delay_ms: 50.0,
            transition_ms: 300.0,
            pulse_ms: 300.0,
            autosave_interval_ms: 5000.0,
            cell_size_px: 20,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn validate(&self) -> Result<()> {
        let durations = [
            ("per_hop_delay_ms", self.per_hop_delay_ms),
            ("transition_ms", self.transition_ms),
            ("pulse_ms", self.pulse_ms),
            ("autosave_interval_ms", self.autosave_interval_ms),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(1..=MAX_CELL_SIZE_PX).contains(&self.cell_size_px) {
            return Err(EngineError::Config(format!(
                "cell_size_px must be between 1 and {}, got {}",
                MAX_CELL_SIZE_PX, self.cell_size_px
            )));
        }
        Ok(())
    }

    pub fn wave_timing(&self) -> WaveTiming {
        WaveTiming {
            per_hop_delay_ms: self.per_hop_delay_ms,
            transition_ms: self.transition_ms,
            pulse_ms: self.pulse_ms,
        }
    }
}
