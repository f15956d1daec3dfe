use serde::{Deserialize, Serialize};

/// A point in n-dimensional Euclidean space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position(Vec<f64>);

impl Position {
    pub fn new(coordinates: Vec<f64>) -> Position {
        Position(coordinates)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.0
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        debug_assert_eq!(self.0.len(), other.0.len());

        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl<const N: usize> From<[f64; N]> for Position {
    fn from(coordinates: [f64; N]) -> Self {
        Position(coordinates.to_vec())
    }
}
