use serde::{Serialize, Deserialize};
use crate::core::curve_params::Domain;

/// Helix with an explicit radius and vertical offset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HelixSpec {
    pub radius: f64,
    pub pitch: f64,
    pub turns: f64,
    pub phase: f64,
    #[serde(default)]
    pub z_offset: f64,
}

impl Default for HelixSpec {
    fn default() -> Self {
        HelixSpec {
            radius: 1.0,
            pitch: 0.2,
            turns: 3.0,
            phase: 0.0,
            z_offset: 0.0,
        }
    }
}

impl HelixSpec {
    pub fn domain(&self) -> Domain {
        Domain::turns(self.turns)
    }
}
