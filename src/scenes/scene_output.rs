use serde::Serialize;
use crate::core::coupling_point::CouplingPoint;
use crate::core::curve::Curve;
use crate::core::surface::Surface;
use crate::dynamics::lagrangian::EnergySeries;
use crate::generation::coupling::CouplingLink;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LabeledCurve {
    pub label: String,
    pub curve: Curve,
}

impl LabeledCurve {
    pub fn new(label: impl Into<String>, curve: Curve) -> Self {
        LabeledCurve { label: label.into(), curve }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HbarReport {
    pub moment_of_inertia: f64,
    pub angular_frequency: f64,
    pub hbar: f64,
    pub energy_profile: Vec<f64>,
    pub normalized_profile: Vec<f64>,
    pub resonant: bool,
}

/// Everything a renderer needs to draw one scene.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SceneOutput {
    pub name: String,
    pub curves: Vec<LabeledCurve>,
    pub couplings: Vec<CouplingPoint>,
    pub links: Vec<CouplingLink>,
    pub surface: Option<Surface>,
    pub energy: Option<EnergySeries>,
    pub derivatives: Vec<LabeledCurve>,
    pub hbar: Option<HbarReport>,
}

impl SceneOutput {
    pub fn new(name: impl Into<String>) -> Self {
        SceneOutput { name: name.into(), ..Default::default() }
    }

    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.label == label).map(|c| &c.curve)
    }

    pub fn first_coupling(&self) -> Option<&CouplingPoint> {
        self.couplings.first()
    }
}
