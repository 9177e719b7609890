use bevy_math::DVec3;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CouplingPoint {
    pub position: DVec3,
    pub source_index: usize,
    pub distance: f64,
}

impl CouplingPoint {
    pub fn fixed(position: DVec3) -> Self {
        CouplingPoint {
            position,
            source_index: 0,
            distance: 0.0,
        }
    }
}
