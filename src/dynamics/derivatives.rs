use crate::core::curve::Curve;
use crate::core::helix_error::{HelixError, HelixResult};

/// Numerical derivative of `values` with respect to `coords`.
///
/// Interior samples use the second-order central difference for non-uniform
/// spacing, the two end samples use first-order one-sided differences.
pub fn gradient(values: &[f64], coords: &[f64]) -> HelixResult<Vec<f64>> {
    if values.len() != coords.len() {
        return Err(HelixError::InvalidParameter(format!(
            "gradient needs one coordinate per value, got {} values and {} coordinates",
            values.len(),
            coords.len()
        )));
    }
    let n = values.len();
    if n < 2 {
        return Err(HelixError::InvalidParameter(format!("gradient needs at least 2 samples, got {}", n)));
    }

    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / (coords[1] - coords[0]));
    for i in 1..n - 1 {
        let hs = coords[i] - coords[i - 1];
        let hd = coords[i + 1] - coords[i];
        let a = -hd / (hs * (hd + hs));
        let b = (hd - hs) / (hd * hs);
        let c = hs / (hd * (hd + hs));
        out.push(a * values[i - 1] + b * values[i] + c * values[i + 1]);
    }
    out.push((values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]));
    Ok(out)
}

/// [`gradient`] with unit spacing between samples.
pub fn gradient_unit(values: &[f64]) -> HelixResult<Vec<f64>> {
    let coords: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    gradient(values, &coords)
}

/// Component-wise derivative of a curve.
pub fn gradient_curve(curve: &Curve, coords: &[f64]) -> HelixResult<Curve> {
    Curve::from_coordinates(
        gradient(curve.x(), coords)?,
        gradient(curve.y(), coords)?,
        gradient(curve.z(), coords)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exact_on_linear_data() {
        let coords = [0.0, 0.5, 1.5, 3.0, 3.2];
        let values: Vec<f64> = coords.iter().map(|t| 4.0 * t - 1.0).collect();
        for g in gradient(&values, &coords).unwrap() {
            assert_relative_eq!(g, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_spacing_matches_central_formula() {
        let values = [1.0, 2.0, 4.0, 7.0, 11.0];
        assert_eq!(gradient_unit(&values).unwrap(), vec![1.0, 1.5, 2.5, 3.5, 4.0]);
    }

    #[test]
    fn exact_on_quadratics_inside() {
        let coords = [0.0, 0.1, 0.35, 0.4, 1.0];
        let values: Vec<f64> = coords.iter().map(|t| t * t).collect();
        let g = gradient(&values, &coords).unwrap();
        for i in 1..4 {
            assert_relative_eq!(g[i], 2.0 * coords[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_short_or_ragged_input() {
        assert!(gradient(&[1.0], &[0.0]).is_err());
        assert!(gradient(&[1.0, 2.0], &[0.0]).is_err());
    }
}
