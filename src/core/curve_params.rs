use std::f64::consts::TAU;
use serde::{Serialize, Deserialize};
use crate::core::helix_error::{HelixError, HelixResult};

/// Angle, spin, phase and pitch of a helicoidal projection.
///
/// `angle` and `phase` are radians, `spin` counts full turns and `pitch` is the
/// vertical advance per radian.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub angle: f64,
    pub spin: f64,
    pub phase: f64,
    pub pitch: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams::from_degrees(30.0, 3.0, 0.0, 0.2)
    }
}

impl CurveParams {
    pub fn new(angle: f64, spin: f64, phase: f64, pitch: f64) -> Self {
        CurveParams { angle, spin, phase, pitch }
    }

    pub fn from_degrees(angle_degrees: f64, spin: f64, phase: f64, pitch: f64) -> Self {
        CurveParams::new(angle_degrees.to_radians(), spin, phase, pitch)
    }

    /// Radius of the projected circle, `cos(angle)`.
    pub fn radius(&self) -> f64 {
        self.angle.cos()
    }

    pub fn spin_domain(&self) -> Domain {
        Domain::turns(self.spin)
    }

    pub fn with_pitch(self, pitch: f64) -> Self {
        CurveParams { pitch, ..self }
    }

    pub fn validate(&self) -> HelixResult<()> {
        if !self.spin.is_finite() || self.spin <= 0.0 {
            return Err(HelixError::InvalidParameter(format!("spin must be positive, got {}", self.spin)));
        }
        if !(self.angle.is_finite() && self.phase.is_finite() && self.pitch.is_finite()) {
            return Err(HelixError::InvalidParameter(format!(
                "angle, phase and pitch must be finite, got {}, {}, {}",
                self.angle, self.phase, self.pitch
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Self {
        Domain { start, end }
    }

    /// `[0, turns * 2π]`.
    pub fn turns(turns: f64) -> Self {
        Domain::new(0.0, turns * TAU)
    }

    /// Evenly spaced samples from `start` to `end` inclusive.
    pub fn linspace(&self, sample_count: usize) -> Vec<f64> {
        linspace(self.start, self.end, sample_count)
    }
}

pub fn linspace(start: f64, end: f64, sample_count: usize) -> Vec<f64> {
    match sample_count {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}
