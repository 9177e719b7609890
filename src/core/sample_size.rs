use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSize {
    Square(usize),
    Grid(usize, usize),
}

impl SampleSize {
    /// Rows and columns of a two-dimensional sampling grid.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        match self {
            SampleSize::Square(n) => (*n, *n),
            SampleSize::Grid(rows, cols) => (*rows, *cols),
        }
    }
}
