use serde::Deserialize;

use crate::Error;

pub(crate) const METERS_PER_KILOMETER: f64 = 1000.0;
pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;

/// Pairwise travel matrix for a single mode, in provider units
/// (meters and seconds).
///
/// The field layout matches the body of a Mapbox Directions-Matrix
/// response, so a fetched document deserializes into this type directly.
/// `None` cells mark the diagonal and unreachable pairs; the graph builder
/// skips them.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelMatrix {
    pub distances: Vec<Vec<Option<f64>>>,
    pub durations: Vec<Vec<Option<f64>>>,
}

impl TravelMatrix {
    /// Both scalars of the cell `(from, to)`, or `None` when either is
    /// absent.
    pub fn cell(&self, from: usize, to: usize) -> Option<MatrixCell> {
        let distance_m = (*self.distances.get(from)?.get(to)?)?;
        let duration_s = (*self.durations.get(from)?.get(to)?)?;
        Some(MatrixCell {
            distance_m,
            duration_s,
        })
    }

    /// Checks that both tables are square with `expected` rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] describing the first shape mismatch.
    pub fn validate(&self, expected: usize) -> Result<(), Error> {
        for (name, table) in [("distances", &self.distances), ("durations", &self.durations)] {
            if table.len() != expected {
                return Err(Error::InvalidData(format!(
                    "matrix {name} has {} rows, expected {expected}",
                    table.len()
                )));
            }
            for (row_idx, row) in table.iter().enumerate() {
                if row.len() != expected {
                    return Err(Error::InvalidData(format!(
                        "matrix {name} row {row_idx} has {} cells, expected {expected}",
                        row.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A single complete matrix cell, still in provider units.
#[derive(Debug, Clone, Copy)]
pub struct MatrixCell {
    pub distance_m: f64,
    pub duration_s: f64,
}

impl MatrixCell {
    pub fn distance_km(self) -> f64 {
        self.distance_m / METERS_PER_KILOMETER
    }

    pub fn duration_min(self) -> f64 {
        self.duration_s / SECONDS_PER_MINUTE
    }
}
