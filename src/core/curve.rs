use bevy_math::DVec3;
use serde::{Serialize, Deserialize};
use crate::core::helix_error::{HelixError, HelixResult};

/// Ordered samples of a 3D trajectory, kept as three coordinate sequences of
/// equal length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(try_from = "RawCurve")]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

#[derive(Deserialize)]
struct RawCurve {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl TryFrom<RawCurve> for Curve {
    type Error = HelixError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        Curve::from_coordinates(raw.x, raw.y, raw.z)
    }
}

impl Curve {
    pub fn from_coordinates(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> HelixResult<Self> {
        if x.len() != y.len() {
            return Err(HelixError::LengthMismatch { left: x.len(), right: y.len() });
        }
        if x.len() != z.len() {
            return Err(HelixError::LengthMismatch { left: x.len(), right: z.len() });
        }
        Ok(Curve { x, y, z })
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        let points = points.into_iter();
        let capacity = points.size_hint().0;
        let mut curve = Curve {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        };
        for point in points {
            curve.x.push(point.x);
            curve.y.push(point.y);
            curve.z.push(point.z);
        }
        curve
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn point(&self, index: usize) -> Option<DVec3> {
        if index < self.len() {
            Some(DVec3::new(self.x[index], self.y[index], self.z[index]))
        } else {
            None
        }
    }

    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| DVec3::new(*x, *y, *z))
    }

    pub fn translated(&self, offset: DVec3) -> Curve {
        Curve {
            x: self.x.iter().map(|v| v + offset.x).collect(),
            y: self.y.iter().map(|v| v + offset.y).collect(),
            z: self.z.iter().map(|v| v + offset.z).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_coordinates() {
        let result = Curve::from_coordinates(vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]);
        assert_eq!(result, Err(HelixError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn points_and_translation() {
        let curve = Curve::from_points([DVec3::new(1.0, 2.0, 3.0), DVec3::new(-1.0, 0.0, 0.5)]);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.point(1), Some(DVec3::new(-1.0, 0.0, 0.5)));
        assert_eq!(curve.point(2), None);

        let shifted = curve.translated(DVec3::new(1.0, 1.0, 1.0));
        let points: Vec<DVec3> = shifted.points().collect();
        assert_eq!(points, vec![DVec3::new(2.0, 3.0, 4.0), DVec3::new(0.0, 1.0, 1.5)]);
        // source is untouched
        assert_eq!(curve.x(), &[1.0, -1.0]);
    }

    #[test]
    fn deserializing_checks_lengths() {
        let ok: Result<Curve, _> = ron::from_str("(x: [1.0], y: [2.0], z: [3.0])");
        assert!(ok.is_ok());
        let ragged: Result<Curve, _> = ron::from_str("(x: [1.0, 2.0], y: [2.0], z: [3.0])");
        assert!(ragged.is_err());
    }
}
