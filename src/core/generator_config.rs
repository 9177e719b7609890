use serde::{Serialize, Deserialize};
use crate::core::seeded_or_not::SeededOrNot;

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
pub const DEFAULT_SEED: u64 = 132;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sample_count: usize,
    pub seed: SeededOrNot,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: SeededOrNot::Seeded(DEFAULT_SEED),
        }
    }
}

impl GeneratorConfig {
    pub fn samples_or_default(&self, sample_count: Option<usize>) -> usize {
        sample_count.unwrap_or(self.sample_count)
    }
}
