pub mod core;
pub mod dynamics;
pub mod generation;
pub mod management;
pub mod scenes;
pub mod serialization;

pub use crate::core::coupling_point::CouplingPoint;
pub use crate::core::curve::Curve;
pub use crate::core::curve_params::{CurveParams, Domain};
pub use crate::core::generator_config::GeneratorConfig;
pub use crate::core::helix_error::{HelixError, HelixResult};
pub use crate::generation::coupling::find_coupling;
pub use crate::generation::helix::generate;
pub use crate::scenes::evaluation::{evaluate, evaluate_by_name, SceneContext};
pub use crate::scenes::scene::Scene;
pub use crate::scenes::scene_output::SceneOutput;
