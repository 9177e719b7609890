use std::f64::consts::{PI, TAU};
use bevy_math::DVec3;
use serde::{Serialize, Deserialize};
use crate::core::curve::Curve;
use crate::core::curve_params::{linspace, Domain};
use crate::core::helix_error::{HelixError, HelixResult};
use crate::core::surface::Surface;
use crate::generation::helix::check_sample_count;

/// Unit vector from a polar angle (measured from +Z) and an azimuth, both radians.
pub fn direction_from_angles(polar: f64, azimuth: f64) -> DVec3 {
    DVec3::new(
        polar.sin() * azimuth.cos(),
        polar.sin() * azimuth.sin(),
        polar.cos(),
    )
}

/// One dispersion branch leaving an origin along a direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BranchSpec {
    pub direction: DVec3,
    pub spin: f64,
    pub torsion: f64,
    pub phase: f64,
}

/// `x = d.x cos(spin θ + phase)`, `y = d.y sin(spin θ + phase)`, `z = d.z torsion θ`,
/// shifted by `origin`.
pub fn branch_curve(branch: &BranchSpec, origin: DVec3, domain: &Domain, sample_count: usize) -> HelixResult<Curve> {
    check_sample_count(sample_count)?;

    let d = branch.direction;
    let points = domain.linspace(sample_count).into_iter().map(|t| {
        let angle = branch.spin * t + branch.phase;
        DVec3::new(
            d.x * angle.cos(),
            d.y * angle.sin(),
            d.z * branch.torsion * t,
        ) + origin
    });
    Ok(Curve::from_points(points))
}

/// Deformation of the unit sphere used by the radial field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RadialField {
    pub torsion_amplitude: f64,
    pub torsion_frequency: f64,
    pub spin_amplitude: f64,
    pub spin_frequency: f64,
}

impl Default for RadialField {
    fn default() -> Self {
        RadialField {
            torsion_amplitude: 0.3,
            torsion_frequency: 3.0,
            spin_amplitude: 0.2,
            spin_frequency: 2.0,
        }
    }
}

impl RadialField {
    pub fn radius(&self, phi: f64, theta: f64) -> f64 {
        1.0 + self.torsion_amplitude * (self.torsion_frequency * phi).sin()
            + self.spin_amplitude * (self.spin_frequency * theta).cos()
    }
}

/// Samples the field with the inclination `phi ∈ [0, π]` along columns and the
/// azimuth `theta ∈ [0, 2π]` along rows.
pub fn radial_field(field: &RadialField, rows: usize, cols: usize) -> HelixResult<Surface> {
    if rows < 2 || cols < 2 {
        return Err(HelixError::InvalidParameter(format!("radial grid needs at least 2x2 samples, got {}x{}", rows, cols)));
    }

    let phi = linspace(0.0, PI, cols);
    let theta = linspace(0.0, TAU, rows);
    let mut surface = Surface {
        rows,
        cols,
        x: Vec::with_capacity(rows * cols),
        y: Vec::with_capacity(rows * cols),
        z: Vec::with_capacity(rows * cols),
    };

    for t in &theta {
        for p in &phi {
            let r = field.radius(*p, *t);
            surface.x.push(r * p.sin() * t.cos());
            surface.y.push(r * p.sin() * t.sin());
            surface.z.push(r * p.cos());
        }
    }

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn directions_are_unit_length() {
        for (polar, azimuth) in [(0.2, 0.0), (1.0, 2.0), (2.9, 5.5)] {
            assert_relative_eq!(direction_from_angles(polar, azimuth).length(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(direction_from_angles(0.0, 1.0).z, 1.0);
    }

    #[test]
    fn branch_starts_near_origin() {
        let branch = BranchSpec { direction: DVec3::new(0.6, 0.0, 0.8), spin: 2.0, torsion: 0.2, phase: 0.0 };
        let origin = DVec3::new(1.0, 2.0, 3.0);
        let curve = branch_curve(&branch, origin, &Domain::turns(1.0), 100).unwrap();
        assert_eq!(curve.len(), 100);
        let start = curve.point(0).unwrap();
        assert_relative_eq!(start.x, 1.6, epsilon = 1e-12);
        assert_relative_eq!(start.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(start.z, 3.0, epsilon = 1e-12);
        assert_relative_eq!(curve.z()[99], 3.0 + 0.8 * 0.2 * TAU, epsilon = 1e-12);
    }

    #[test]
    fn undeformed_field_is_unit_sphere() {
        let field = RadialField { torsion_amplitude: 0.0, torsion_frequency: 3.0, spin_amplitude: 0.0, spin_frequency: 2.0 };
        let surface = radial_field(&field, 12, 9).unwrap();
        assert_eq!(surface.x.len(), 108);
        for i in 0..surface.x.len() {
            let r = (surface.x[i].powi(2) + surface.y[i].powi(2) + surface.z[i].powi(2)).sqrt();
            assert_relative_eq!(r, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn field_poles_follow_spin_modulation() {
        let surface = radial_field(&RadialField::default(), 60, 60).unwrap();
        // north pole, theta = 0: R = 1 + 0.2
        let (_, _, z) = surface.point(0, 0).unwrap();
        assert_relative_eq!(z, 1.2, epsilon = 1e-12);
        assert!(radial_field(&RadialField::default(), 1, 60).is_err());
    }
}
