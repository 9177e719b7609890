use rand::Rng;
use serde::{Serialize, Deserialize};
use crate::generation::helpers::GenRng;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeededOrNot {
    Seeded(u64),
    Unseeded,
}

impl SeededOrNot {
    /// Returns the fixed seed, or draws a fresh one from `gen_rng`.
    pub fn resolve(&self, gen_rng: &mut GenRng) -> u64 {
        match self {
            SeededOrNot::Seeded(seed) => *seed,
            SeededOrNot::Unseeded => gen_rng.rng_mut().gen::<u64>(),
        }
    }
}
