use bevy_math::DVec3;
use serde::{Serialize, Deserialize};
use crate::core::curve_params::{CurveParams, Domain};

/// Where a dispersion starts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Anchor {
    Fixed(DVec3),
    Coupling {
        first: CurveParams,
        second: CurveParams,
        domain: Domain,
    },
    /// First coupling point of another scene file.
    Scene(String),
}
