use serde::{Serialize, Deserialize};
use crate::core::curve_params::{CurveParams, Domain};
use crate::core::helix_spec::HelixSpec;
use crate::core::rand_data::RandData;
use crate::core::sample_size::SampleSize;
use crate::core::seeded_or_not::SeededOrNot;
use crate::core::sub_spin::SubSpin;
use crate::dynamics::lagrangian::{HelicalMotion, VelocityMode};
use crate::generation::helpers::ParamRanges;
use crate::generation::transformation::RadialField;
use crate::scenes::anchor::Anchor;

/// One self-contained visualization. Every value a scene depends on is held
/// here; `sample_count` falls back to the generator config when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Scene {
    Projection {
        params: CurveParams,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    MultiProjection {
        params: Vec<CurveParams>,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    Coupling {
        first: CurveParams,
        second: CurveParams,
        domain: Domain,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    PostCoupling {
        original: CurveParams,
        partner: CurveParams,
        modified_pitch: f64,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    ProjectiveSpace {
        ranges: ParamRanges,
        count: usize,
        seed: SeededOrNot,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    RadialField {
        field: RadialField,
        grid: SampleSize,
    },
    Dispersion {
        anchor: Anchor,
        branches: Vec<CurveParams>,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    ToroidalDispersion {
        anchor: Anchor,
        branches: usize,
        seed: SeededOrNot,
        polar_degrees: RandData,
        azimuth: RandData,
        torsion: RandData,
        spin: RandData,
        domain: Domain,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    HelixCoupling {
        first: HelixSpec,
        second: HelixSpec,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    DoubleRotation {
        params: CurveParams,
        sub_spin: SubSpin,
        phase_offset: f64,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    StructuralHbar {
        motion: HelicalMotion,
        turns: f64,
        ripple: f64,
        ripple_frequency: f64,
        partner_phase: f64,
        partner_z_offset: f64,
        resonance_window: f64,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    HeadingLagrangian {
        motion: HelicalMotion,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    FrenetLagrangian {
        motion: HelicalMotion,
        velocity: VelocityMode,
        #[serde(default)]
        sample_count: Option<usize>,
    },
    CouplingNetwork {
        ranges: ParamRanges,
        count: usize,
        seed: SeededOrNot,
        threshold: f64,
        #[serde(default)]
        sample_count: Option<usize>,
    },
}

impl Scene {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Scene::Projection { .. } => "Projection",
            Scene::MultiProjection { .. } => "MultiProjection",
            Scene::Coupling { .. } => "Coupling",
            Scene::PostCoupling { .. } => "PostCoupling",
            Scene::ProjectiveSpace { .. } => "ProjectiveSpace",
            Scene::RadialField { .. } => "RadialField",
            Scene::Dispersion { .. } => "Dispersion",
            Scene::ToroidalDispersion { .. } => "ToroidalDispersion",
            Scene::HelixCoupling { .. } => "HelixCoupling",
            Scene::DoubleRotation { .. } => "DoubleRotation",
            Scene::StructuralHbar { .. } => "StructuralHbar",
            Scene::HeadingLagrangian { .. } => "HeadingLagrangian",
            Scene::FrenetLagrangian { .. } => "FrenetLagrangian",
            Scene::CouplingNetwork { .. } => "CouplingNetwork",
        }
    }
}
