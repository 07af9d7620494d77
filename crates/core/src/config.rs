//! Game configuration
//!
//! Defaults mirror the constants in [`crate::types`]. Front ends can override
//! them through environment variables:
//!
//! - `MATCH3_SEED`: RNG seed (default: 1)
//! - `MATCH3_MOVES`: moves per game (default: 30)
//! - `MATCH3_MIN_MATCH`: shortest removable run (default: 3)
//! - `MATCH3_ANIMALS`: number of animal kinds in play (default: 5)
//!
//! Unparseable values fall back to the default; out-of-range values are
//! reported by [`GameConfig::validate`].

use crate::error::ConfigError;
use crate::types::{
    ANIMAL_TYPES, BOARD_SIZE, INITIAL_MOVES, MAX_CASCADE_PASSES, MIN_MATCH, POINTS_PER_TILE,
};

pub const ENV_SEED: &str = "MATCH3_SEED";
pub const ENV_MOVES: &str = "MATCH3_MOVES";
pub const ENV_MIN_MATCH: &str = "MATCH3_MIN_MATCH";
pub const ENV_ANIMALS: &str = "MATCH3_ANIMALS";

/// Rules and seed for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub min_match: usize,
    pub animal_kinds: u8,
    pub initial_moves: u32,
    pub points_per_tile: u32,
    pub max_cascade_passes: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            min_match: MIN_MATCH,
            animal_kinds: ANIMAL_TYPES,
            initial_moves: INITIAL_MOVES,
            points_per_tile: POINTS_PER_TILE,
            max_cascade_passes: MAX_CASCADE_PASSES,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).map(|s| s.trim().to_string());

        Self {
            seed: parse(ENV_SEED)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            initial_moves: parse(ENV_MOVES)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.initial_moves),
            min_match: parse(ENV_MIN_MATCH)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_match),
            animal_kinds: parse(ENV_ANIMALS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.animal_kinds),
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=BOARD_SIZE).contains(&self.min_match) {
            return Err(ConfigError::MinMatch {
                value: self.min_match,
                max: BOARD_SIZE,
            });
        }
        if !(3..=ANIMAL_TYPES).contains(&self.animal_kinds) {
            return Err(ConfigError::AnimalKinds {
                value: self.animal_kinds,
                max: ANIMAL_TYPES,
            });
        }
        if self.max_cascade_passes == 0 {
            return Err(ConfigError::CascadePasses);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_moves, 30);
        assert_eq!(config.min_match, 3);
    }

    #[test]
    fn lookup_overrides_and_falls_back() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_SEED, " 42 "),
            (ENV_MOVES, "12"),
            (ENV_MIN_MATCH, "four"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.initial_moves, 12);
        assert_eq!(config.min_match, MIN_MATCH);
        assert_eq!(config.animal_kinds, ANIMAL_TYPES);
    }

    #[test]
    fn validate_rejects_out_of_range_rules() {
        let config = GameConfig {
            min_match: 8,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinMatch { value: 8, max: 7 })
        );

        let config = GameConfig {
            animal_kinds: 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AnimalKinds { value: 2, .. })
        ));

        let config = GameConfig {
            max_cascade_passes: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::CascadePasses));
    }
}
