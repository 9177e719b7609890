use bevy_utils::tracing::debug;
use crate::core::curve::Curve;
use crate::core::curve_params::{CurveParams, Domain};
use crate::core::helix_error::{HelixError, HelixResult};
use crate::core::helix_spec::HelixSpec;
use crate::core::sub_spin::SubSpin;

/// Samples the projection over its natural domain `[0, spin * 2π]`.
///
/// `x = cos(θ + phase) cos(angle)`, `y = sin(θ + phase) cos(angle)`, `z = pitch θ`.
pub fn generate(params: &CurveParams, sample_count: usize) -> HelixResult<Curve> {
    params.validate()?;
    sample_curve(params, &SubSpin::default(), &params.spin_domain(), sample_count)
}

/// Same formulas as [`generate`] over an explicit domain instead of the spin domain.
pub fn generate_on_domain(params: &CurveParams, domain: &Domain, sample_count: usize) -> HelixResult<Curve> {
    params.validate()?;
    sample_curve(params, &SubSpin::default(), domain, sample_count)
}

/// Toroidal variant: the radius and height carry a secondary rotation.
pub fn generate_with_sub_spin(params: &CurveParams, sub_spin: &SubSpin, sample_count: usize) -> HelixResult<Curve> {
    params.validate()?;
    sample_curve(params, sub_spin, &params.spin_domain(), sample_count)
}

pub fn generate_helix(spec: &HelixSpec, sample_count: usize) -> HelixResult<Curve> {
    if !spec.turns.is_finite() || spec.turns <= 0.0 {
        return Err(HelixError::InvalidParameter(format!("helix turns must be positive, got {}", spec.turns)));
    }
    check_sample_count(sample_count)?;

    let theta = spec.domain().linspace(sample_count);
    let x = theta.iter().map(|t| spec.radius * (t + spec.phase).cos()).collect();
    let y = theta.iter().map(|t| spec.radius * (t + spec.phase).sin()).collect();
    let z = theta.iter().map(|t| spec.pitch * t + spec.z_offset).collect();
    Curve::from_coordinates(x, y, z)
}

pub(crate) fn check_sample_count(sample_count: usize) -> HelixResult<()> {
    if sample_count < 2 {
        return Err(HelixError::InvalidParameter(format!("sample count must be at least 2, got {}", sample_count)));
    }
    Ok(())
}

fn sample_curve(params: &CurveParams, sub_spin: &SubSpin, domain: &Domain, sample_count: usize) -> HelixResult<Curve> {
    check_sample_count(sample_count)?;

    let theta = domain.linspace(sample_count);
    let base_radius = params.radius();
    let mut x = Vec::with_capacity(sample_count);
    let mut y = Vec::with_capacity(sample_count);
    let mut z = Vec::with_capacity(sample_count);

    for t in theta {
        let (radius, lift) = if sub_spin.is_zero() {
            (base_radius, 0.0)
        } else {
            let m = sub_spin.frequency * t + sub_spin.phase;
            (base_radius + sub_spin.amplitude * m.cos(), sub_spin.vertical_amplitude * m.sin())
        };
        let (sin, cos) = (t + params.phase).sin_cos();
        x.push(cos * radius);
        y.push(sin * radius);
        z.push(params.pitch * t + lift);
    }

    debug!("generated {} samples over [{}, {}]", sample_count, domain.start, domain.end);
    Curve::from_coordinates(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn four_samples_over_one_turn() {
        let curve = generate(&CurveParams::new(0.0, 1.0, 0.0, 0.0), 4).unwrap();
        let expected_x = [1.0, -0.5, -0.5, 1.0];
        let expected_y = [0.0, 0.866_025_403_784_438_6, -0.866_025_403_784_438_6, 0.0];
        for i in 0..4 {
            assert_relative_eq!(curve.x()[i], expected_x[i], epsilon = 1e-12);
            assert_relative_eq!(curve.y()[i], expected_y[i], epsilon = 1e-12);
            assert_eq!(curve.z()[i], 0.0);
        }
    }

    #[test]
    fn rejects_bad_input() {
        let params = CurveParams::default();
        assert!(matches!(generate(&params, 1), Err(HelixError::InvalidParameter(_))));
        assert!(matches!(generate(&params, 0), Err(HelixError::InvalidParameter(_))));
        assert!(matches!(generate(&CurveParams { spin: 0.0, ..params }, 10), Err(HelixError::InvalidParameter(_))));
        assert!(matches!(generate(&CurveParams { spin: -2.0, ..params }, 10), Err(HelixError::InvalidParameter(_))));
    }

    #[test]
    fn pitch_scales_height() {
        let curve = generate(&CurveParams::new(0.3, 2.0, 1.0, 0.25), 50).unwrap();
        assert_relative_eq!(*curve.z().last().unwrap(), 0.25 * 2.0 * TAU, epsilon = 1e-12);
        let flat = generate(&CurveParams::new(0.3, 2.0, 1.0, 0.0), 50).unwrap();
        assert!(flat.z().iter().all(|z| *z == 0.0));
    }

    #[test]
    fn phase_rotates_start() {
        let curve = generate(&CurveParams::new(0.0, 1.0, FRAC_PI_2, 0.0), 10).unwrap();
        assert_relative_eq!(curve.x()[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.y()[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn explicit_domain_ignores_spin_length() {
        let params = CurveParams::new(0.0, 3.0, 0.0, 1.0);
        let curve = generate_on_domain(&params, &Domain::new(0.0, PI), 3).unwrap();
        assert_relative_eq!(curve.z()[2], PI, epsilon = 1e-12);
        assert_relative_eq!(curve.x()[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_sub_spin_matches_plain_generator() {
        let params = CurveParams::from_degrees(45.0, 2.5, 0.4, 0.3);
        let plain = generate(&params, 200).unwrap();
        let modulated = generate_with_sub_spin(&params, &SubSpin::default(), 200).unwrap();
        assert_eq!(plain, modulated);
    }

    #[test]
    fn sub_spin_modulates_radius() {
        let params = CurveParams::new(0.0, 1.0, 0.0, 0.0);
        let sub_spin = SubSpin { amplitude: 0.1, frequency: 5.0, vertical_amplitude: 0.05, phase: 0.0 };
        let curve = generate_with_sub_spin(&params, &sub_spin, 5).unwrap();
        // θ = 0: radius 1.1, lift 0
        assert_relative_eq!(curve.x()[0], 1.1, epsilon = 1e-12);
        assert_relative_eq!(curve.z()[0], 0.0, epsilon = 1e-12);
        // θ = π/2: m = 5π/2, cos m = 0, sin m = 1
        assert_relative_eq!(curve.y()[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(curve.z()[1], 0.05, epsilon = 1e-12);
    }

    #[test]
    fn helix_offset_and_radius() {
        let spec = HelixSpec { radius: 2.0, pitch: 0.3, turns: 2.5, phase: PI / 3.0, z_offset: 1.5 };
        let curve = generate_helix(&spec, 100).unwrap();
        assert_eq!(curve.len(), 100);
        assert_relative_eq!(curve.z()[0], 1.5, epsilon = 1e-12);
        for p in curve.points() {
            assert_relative_eq!(p.x.hypot(p.y), 2.0, epsilon = 1e-12);
        }
        assert!(generate_helix(&HelixSpec { turns: 0.0, ..spec }, 100).is_err());
    }
}
