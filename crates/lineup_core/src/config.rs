//! # Fair-Play Rule Configuration
//!
//! 리그 규정 상수를 한 곳에서 관리.
//!
//! Defaults reproduce the league rules exactly (3 of 4 quarters, goalkeeper
//! ceilings 2/3/4 for 7v7/9v9/11v11). A JSON override file can be supplied
//! through the `LINEUP_RULES_PATH` environment variable:
//!
//! ```json
//! { "min_quarters": 3, "min_roster_size": 8, "goalkeeper_ceilings": { "7v7": 2 } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LineupError, Result};
use crate::models::{GameFormat, QUARTERS};

pub const RULES_PATH_ENV: &str = "LINEUP_RULES_PATH";

/// Tunable fair-play thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairPlayRules {
    /// Quarters every eligible player must play (default: 3)
    #[serde(default = "default_min_quarters")]
    pub min_quarters: u8,

    /// Smallest roster accepted at the boundary (default: 4)
    ///
    /// With fewer players than this the full-game rule cannot be satisfied
    /// in any meaningful way, so such rosters are refused up front.
    #[serde(default = "default_min_roster_size")]
    pub min_roster_size: usize,

    /// Per-format goalkeeper ceilings; formats not listed use the league default.
    #[serde(default)]
    pub goalkeeper_ceilings: BTreeMap<GameFormat, u8>,
}

fn default_min_quarters() -> u8 {
    3
}
fn default_min_roster_size() -> usize {
    4
}

impl Default for FairPlayRules {
    fn default() -> Self {
        Self {
            min_quarters: default_min_quarters(),
            min_roster_size: default_min_roster_size(),
            goalkeeper_ceilings: BTreeMap::new(),
        }
    }
}

impl FairPlayRules {
    /// League rules, no overrides.
    pub fn league() -> Self {
        Self::default()
    }

    pub fn goalkeeper_ceiling(&self, format: GameFormat) -> u8 {
        self.goalkeeper_ceilings
            .get(&format)
            .copied()
            .unwrap_or_else(|| format.goalkeeper_ceiling())
    }

    pub fn validate(&self) -> Result<()> {
        let quarters = QUARTERS as u8;
        if !(1..=quarters).contains(&self.min_quarters) {
            return Err(LineupError::InvalidRules(format!(
                "min_quarters must be 1..={quarters}, got {}",
                self.min_quarters
            )));
        }
        if self.min_roster_size == 0 {
            return Err(LineupError::InvalidRules("min_roster_size must be at least 1".into()));
        }
        for (format, &ceiling) in &self.goalkeeper_ceilings {
            if !(1..=quarters).contains(&ceiling) {
                return Err(LineupError::InvalidRules(format!(
                    "goalkeeper ceiling for {format} must be 1..={quarters}, got {ceiling}"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rules: FairPlayRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Rules from `LINEUP_RULES_PATH`, or league defaults when unset/blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(RULES_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        debug!(path, "loading fair-play rules override");
        Self::load(Path::new(path))
    }
}
