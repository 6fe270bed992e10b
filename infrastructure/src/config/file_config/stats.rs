//! Counter configuration from TOML (`[stats]` section)

use reconstruct_application::DEFAULT_WORDS_REFINED_SEED;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStatsConfig {
    /// Value the words-refined counter starts from.
    pub words_refined_seed: u64,
}

impl Default for FileStatsConfig {
    fn default() -> Self {
        Self {
            words_refined_seed: DEFAULT_WORDS_REFINED_SEED,
        }
    }
}
