use bevy_math::DVec3;
use bevy_utils::tracing::debug;
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use crate::core::coupling_point::CouplingPoint;
use crate::core::curve::Curve;
use crate::core::helix_error::{HelixError, HelixResult};

/// Midpoint of the closest same-index sample pair of two curves.
///
/// Ties resolve to the lowest index.
pub fn find_coupling(curve_a: &Curve, curve_b: &Curve) -> HelixResult<CouplingPoint> {
    let (source_index, distance) = closest_index(curve_a, curve_b)?;
    let (a, b) = sample_pair(curve_a, curve_b, source_index)?;

    Ok(CouplingPoint {
        position: (a + b) / 2.0,
        source_index,
        distance,
    })
}

/// Closest approach between two curves of a batch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CouplingLink {
    pub first: usize,
    pub second: usize,
    pub first_point: DVec3,
    pub second_point: DVec3,
    pub source_index: usize,
    pub distance: f64,
}

/// Links every pair `(i, j)`, `i < j`, whose closest same-index distance is below `threshold`.
pub fn coupling_network(curves: &[Curve], threshold: f64) -> HelixResult<Vec<CouplingLink>> {
    let mut links = Vec::new();

    for (first, second) in (0..curves.len()).tuple_combinations() {
        let (source_index, distance) = closest_index(&curves[first], &curves[second])?;
        if distance < threshold {
            let (first_point, second_point) = sample_pair(&curves[first], &curves[second], source_index)?;
            links.push(CouplingLink {
                first,
                second,
                first_point,
                second_point,
                source_index,
                distance,
            });
        }
    }

    debug!("{} coupling links below {} among {} curves", links.len(), threshold, curves.len());
    Ok(links)
}

fn closest_index(curve_a: &Curve, curve_b: &Curve) -> HelixResult<(usize, f64)> {
    if curve_a.len() != curve_b.len() || curve_a.is_empty() {
        return Err(HelixError::LengthMismatch { left: curve_a.len(), right: curve_b.len() });
    }

    // NaN distances never win over a real one
    let mut best: Option<(usize, f64)> = None;
    for (i, (a, b)) in curve_a.points().zip(curve_b.points()).enumerate() {
        let distance = a.distance(b);
        let better = match best {
            None => true,
            Some((_, d)) => distance < d || (d.is_nan() && !distance.is_nan()),
        };
        if better {
            best = Some((i, distance));
        }
    }
    best.ok_or(HelixError::LengthMismatch { left: curve_a.len(), right: curve_b.len() })
}

fn sample_pair(curve_a: &Curve, curve_b: &Curve, index: usize) -> HelixResult<(DVec3, DVec3)> {
    match (curve_a.point(index), curve_b.point(index)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(HelixError::LengthMismatch { left: curve_a.len(), right: curve_b.len() }),
    }
}
