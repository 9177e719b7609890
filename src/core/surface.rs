use serde::{Serialize, Deserialize};

/// Row-major grid of surface points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Surface {
    pub rows: usize,
    pub cols: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Surface {
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn point(&self, row: usize, col: usize) -> Option<(f64, f64, f64)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let i = self.index(row, col);
        Some((self.x[i], self.y[i], self.z[i]))
    }
}
