use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Combine, OrderingMode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid scheduler config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Knobs for a [`Scheduler`](crate::scheduler::Scheduler).
///
/// ```json
/// { "ordering": "weighted", "combine": "min", "seed": 7 }
/// ```
///
/// Every field is optional; missing fields take their defaults. Unknown
/// fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    pub ordering: OrderingMode,
    /// Operator used by `Scheduler::composed_with`.
    pub combine: Combine,
    /// Fixed seed for reproducible selection. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SchedulerConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_ordering(mut self, ordering: OrderingMode) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_combine(mut self, combine: Combine) -> Self {
        self.combine = combine;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
