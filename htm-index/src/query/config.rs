//! Cover configuration.

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_RANGE_LEVEL, MAX_LEVEL};
use crate::{IndexError, IndexResult};
use serde::{Deserialize, Serialize};

/// Depth limits for a cover and the level its ranges are expressed at.
///
/// Missing fields in a serialized config take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Deepest level the cover subdivides to (0-30).
    /// Default: 8
    pub max_depth: u32,

    /// Level of the leaf ids in emitted ranges (0-30). Trixels deeper than
    /// this are coarsened to their ancestor.
    /// Default: 20
    pub range_level: u32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            range_level: DEFAULT_RANGE_LEVEL,
        }
    }
}

impl CoverConfig {
    pub fn new(max_depth: u32, range_level: u32) -> IndexResult<Self> {
        let config = Self {
            max_depth,
            range_level,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_range_level(mut self, range_level: u32) -> Self {
        self.range_level = range_level;
        self
    }

    pub fn validate(&self) -> IndexResult<()> {
        for level in [self.max_depth, self.range_level] {
            if level > MAX_LEVEL {
                return Err(IndexError::depth_out_of_range(level, MAX_LEVEL));
            }
        }
        Ok(())
    }
}
