//! Battle configuration.
//!
//! Tunes the decision rule of [`BattleResolver`](crate::battle::BattleResolver):
//!
//! ```text
//! p(favourite wins) = 0.5 + min(score_gap / score_scale, max_edge)
//! ```
//!
//! Configs can be built in code or loaded from TOML:
//!
//! ```
//! use meal_max::core::BattleConfig;
//!
//! let config = BattleConfig::from_toml_str("score_scale = 50.0\nseed = 7").unwrap();
//! assert_eq!(config.score_scale, 50.0);
//! assert_eq!(config.max_edge, 0.49);
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::BattleRng;
use crate::error::{BattleError, Result};

/// Largest allowed `max_edge`; at this value a big enough gap is decisive.
pub const MAX_EDGE_LIMIT: f64 = 0.5;

/// Battle decision parameters.
///
/// Deserialization runs [`BattleConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRecord")]
pub struct BattleConfig {
    /// Score gap that adds one full unit of win probability (default: 100).
    pub score_scale: f64,

    /// Cap on the favourite's edge over a coin flip (default: 0.49).
    /// The favourite never wins with probability above `0.5 + max_edge`.
    pub max_edge: f64,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            score_scale: 100.0,
            max_edge: 0.49,
            seed: None,
        }
    }
}

impl BattleConfig {
    /// Set the score scale.
    #[must_use]
    pub fn with_score_scale(mut self, scale: f64) -> Self {
        assert!(scale.is_finite() && scale > 0.0, "Score scale must be positive");
        self.score_scale = scale;
        self
    }

    /// Set the maximum edge.
    #[must_use]
    pub fn with_max_edge(mut self, edge: f64) -> Self {
        assert!((0.0..=MAX_EDGE_LIMIT).contains(&edge), "Max edge must be within [0, 0.5]");
        self.max_edge = edge;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that loaded values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.score_scale.is_finite() && self.score_scale > 0.0) {
            return Err(BattleError::InvalidConfig(format!(
                "score_scale must be positive, got {}",
                self.score_scale
            )));
        }
        if !(0.0..=MAX_EDGE_LIMIT).contains(&self.max_edge) {
            return Err(BattleError::InvalidConfig(format!(
                "max_edge must be within [0, {MAX_EDGE_LIMIT}], got {}",
                self.max_edge
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let record: ConfigRecord = toml::from_str(input)?;
        BattleConfig::try_from(record)
    }

    /// Build the RNG described by `seed`.
    #[must_use]
    pub fn build_rng(&self) -> BattleRng {
        match self.seed {
            Some(seed) => BattleRng::new(seed),
            None => BattleRng::from_entropy(),
        }
    }
}

/// Unchecked wire shape of a config.
#[derive(Deserialize)]
#[serde(default)]
struct ConfigRecord {
    score_scale: f64,
    max_edge: f64,
    seed: Option<u64>,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        let BattleConfig { score_scale, max_edge, seed } = BattleConfig::default();
        Self { score_scale, max_edge, seed }
    }
}

impl TryFrom<ConfigRecord> for BattleConfig {
    type Error = BattleError;

    fn try_from(record: ConfigRecord) -> Result<Self> {
        let config = BattleConfig {
            score_scale: record.score_scale,
            max_edge: record.max_edge,
            seed: record.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
