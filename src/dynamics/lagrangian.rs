use std::f64::consts::TAU;
use bevy_math::DVec3;
use itertools::{Itertools, MinMaxResult};
use serde::{Serialize, Deserialize};
use crate::core::curve::Curve;
use crate::core::curve_params::linspace;
use crate::core::helix_error::{HelixError, HelixResult};
use crate::dynamics::derivatives::{gradient_curve, gradient_unit};
use crate::generation::helix::check_sample_count;

pub const CURVATURE_EPSILON: f64 = 1e-25;

/// Particle moving on a helix of `radius` with one turn per `period`.
///
/// At time `t` the angle is `θ = ω t + phase` with `ω = 2π / period`, and the
/// position is `(r cos θ, r sin θ, pitch θ)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HelicalMotion {
    pub mass: f64,
    pub radius: f64,
    pub pitch: f64,
    pub period: f64,
    #[serde(default)]
    pub phase: f64,
}

impl Default for HelicalMotion {
    fn default() -> Self {
        HelicalMotion {
            mass: 9.11e-31,
            radius: 1e-11,
            pitch: 5e-13,
            period: 1e-15,
            phase: 0.0,
        }
    }
}

impl HelicalMotion {
    pub fn validate(&self) -> HelixResult<()> {
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(HelixError::InvalidParameter(format!("period must be positive, got {}", self.period)));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(HelixError::InvalidParameter(format!("mass must be positive, got {}", self.mass)));
        }
        Ok(())
    }

    pub fn angular_frequency(&self) -> f64 {
        TAU / self.period
    }

    /// Sample times over one period.
    pub fn time(&self, sample_count: usize) -> Vec<f64> {
        linspace(0.0, self.period, sample_count)
    }

    pub fn position(&self, time: &[f64]) -> Curve {
        let omega = self.angular_frequency();
        let points = time.iter().map(|t| {
            let theta = omega * t + self.phase;
            DVec3::new(self.radius * theta.cos(), self.radius * theta.sin(), self.pitch * theta)
        });
        Curve::from_points(points)
    }

    pub fn velocity(&self, time: &[f64]) -> Curve {
        let omega = self.angular_frequency();
        let points = time.iter().map(|t| {
            let theta = omega * t + self.phase;
            DVec3::new(
                -self.radius * omega * theta.sin(),
                self.radius * omega * theta.cos(),
                self.pitch * omega,
            )
        });
        Curve::from_points(points)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityMode {
    Analytic,
    FiniteDifference,
}

/// Kinetic term `T`, curvature term `V` and `L = T - V` over time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EnergySeries {
    pub time: Vec<f64>,
    pub kinetic: Vec<f64>,
    pub structural: Vec<f64>,
    pub lagrangian: Vec<f64>,
}

impl EnergySeries {
    /// `V = max(T) * κ_norm²` where `κ_norm` is the curvature scaled onto `[0, 1]`.
    pub fn from_curvature(time: Vec<f64>, kinetic: Vec<f64>, curvature: &[f64], epsilon: f64) -> HelixResult<Self> {
        if kinetic.len() != time.len() || curvature.len() != time.len() {
            return Err(HelixError::InvalidParameter(format!(
                "energy series lengths differ: {} times, {} kinetic, {} curvature",
                time.len(),
                kinetic.len(),
                curvature.len()
            )));
        }

        let peak = kinetic.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let structural: Vec<f64> = normalize_span(curvature, epsilon)
            .into_iter()
            .map(|k| peak * k * k)
            .collect();
        let lagrangian = kinetic.iter().zip(&structural).map(|(t, v)| t - v).collect();

        Ok(EnergySeries { time, kinetic, structural, lagrangian })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// `(v - min) / (max - min + epsilon)`. A flat series maps to zeros.
pub fn normalize_span(values: &[f64], epsilon: f64) -> Vec<f64> {
    let (min, max) = match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => return Vec::new(),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let span = max - min + epsilon;
    if span == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / span).collect()
}

pub fn kinetic_energy(mass: f64, velocity: &Curve) -> Vec<f64> {
    velocity.points().map(|v| 0.5 * mass * v.length_squared()).collect()
}

/// Frenet curvature `|v × a| / (|v|³ + ε)` per sample.
pub fn frenet_curvature(velocity: &Curve, acceleration: &Curve) -> HelixResult<Vec<f64>> {
    if velocity.len() != acceleration.len() {
        return Err(HelixError::LengthMismatch { left: velocity.len(), right: acceleration.len() });
    }
    Ok(velocity
        .points()
        .zip(acceleration.points())
        .map(|(v, a)| v.cross(a).length() / (v.length().powi(3) + CURVATURE_EPSILON))
        .collect())
}

/// Energy series where curvature is the per-sample change of heading `atan2(vy, vx)`.
pub fn heading_lagrangian(motion: &HelicalMotion, sample_count: usize) -> HelixResult<(Curve, EnergySeries)> {
    motion.validate()?;
    check_sample_count(sample_count)?;

    let time = motion.time(sample_count);
    let position = motion.position(&time);
    let velocity = motion.velocity(&time);
    let kinetic = kinetic_energy(motion.mass, &velocity);

    let heading: Vec<f64> = velocity.points().map(|v| v.y.atan2(v.x)).collect();
    let curvature: Vec<f64> = gradient_unit(&heading)?.into_iter().map(f64::abs).collect();

    let energy = EnergySeries::from_curvature(time, kinetic, &curvature, 0.0)?;
    Ok((position, energy))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrenetAnalysis {
    pub position: Curve,
    pub velocity: Curve,
    pub acceleration: Curve,
    pub curvature: Vec<f64>,
    pub energy: EnergySeries,
}

/// Energy series from the Frenet curvature of numerically differentiated positions.
pub fn frenet_lagrangian(motion: &HelicalMotion, mode: VelocityMode, sample_count: usize) -> HelixResult<FrenetAnalysis> {
    motion.validate()?;
    check_sample_count(sample_count)?;

    let time = motion.time(sample_count);
    let position = motion.position(&time);
    let velocity = gradient_curve(&position, &time)?;
    let acceleration = gradient_curve(&velocity, &time)?;

    let kinetic = match mode {
        VelocityMode::Analytic => kinetic_energy(motion.mass, &motion.velocity(&time)),
        VelocityMode::FiniteDifference => kinetic_energy(motion.mass, &velocity),
    };
    let curvature = frenet_curvature(&velocity, &acceleration)?;
    let energy = EnergySeries::from_curvature(time, kinetic, &curvature, CURVATURE_EPSILON)?;

    Ok(FrenetAnalysis { position, velocity, acceleration, curvature, energy })
}
