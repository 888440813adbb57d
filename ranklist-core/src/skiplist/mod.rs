//! Rank-aware skip list
//!
//! Every forward link records how many level-0 positions it skips. Summing
//! spans along a descent gives an element's 1-based rank, and descending by
//! span finds the element at a given rank, both in O(log n).
//!
//! ```text
//! level 2: head ----------------- 4 ----------------> 1040 -> nil
//! level 1: head ---- 2 ----> 1015 -------- 2 -------> 1040 -> nil
//! level 0: head -1-> 1010 -1-> 1015 -1-> 1022 -1-> 1040 -> nil
//! ```

mod dump;
mod iter;
mod level;
mod list;
mod node;
mod range;
mod rank;

pub use iter::{Iter, Range};
pub use list::SkipList;

use crate::{RankListError, Result};
use serde::{Deserialize, Serialize};

/// Skip list configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListConfig {
    /// Maximum node height
    pub max_level: usize,
    /// Promotion probability is 1 / branching_factor
    pub branching_factor: u32,
    /// Seed for the level generator
    pub seed: u64,
}

impl SkipListConfig {
    /// Default shape with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_level == 0 || self.max_level > crate::config::MAX_LEVEL_LIMIT {
            return Err(RankListError::InvalidConfig(format!(
                "max_level must be in 1..={}, got {}",
                crate::config::MAX_LEVEL_LIMIT,
                self.max_level
            )));
        }
        if self.branching_factor < 2 {
            return Err(RankListError::InvalidConfig(format!(
                "branching_factor must be at least 2, got {}",
                self.branching_factor
            )));
        }
        Ok(())
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: crate::config::MAX_LEVEL,
            branching_factor: crate::config::BRANCHING_FACTOR,
            seed: crate::config::DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validate() {
        assert!(SkipListConfig::default().validate().is_ok());

        let config = SkipListConfig {
            max_level: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RankListError::InvalidConfig(_))
        ));

        let config = SkipListConfig {
            max_level: crate::config::MAX_LEVEL_LIMIT + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SkipListConfig {
            branching_factor: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: SkipListConfig =
            serde_json::from_str(r#"{ "max_level": 8, "seed": 42 }"#).unwrap();
        assert_eq!(config.max_level, 8);
        assert_eq!(config.seed, 42);
        assert_eq!(config.branching_factor, crate::config::BRANCHING_FACTOR);
    }
}
