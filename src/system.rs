use crate::solve::{Solution, SolveError};
use std::iter::{Extend, FromIterator};

/// A builder for assembling a system of linear equations as an augmented
/// matrix and solving it.
///
/// Each row holds the coefficients of one equation followed by the constant
/// term, so `vec![1.0, 2.0, 3.0]` reads as `1*X0 + 2*X1 = 3`. Rows may have
/// different lengths; the widest row decides how many variables there are
/// and shorter rows are treated as having zero coefficients for the columns
/// they leave out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LinearSystem {
    rows: Vec<Vec<f64>>,
}

impl LinearSystem {
    pub fn new() -> Self { LinearSystem::default() }

    pub fn with(mut self, row: Vec<f64>) -> Self {
        self.push(row);
        self
    }

    pub fn push(&mut self, row: Vec<f64>) { self.rows.push(row); }

    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<f64>>,
    {
        LinearSystem {
            rows: rows.into_iter().collect(),
        }
    }

    /// The number of variables, i.e. the widest row minus its constant term.
    pub fn num_variables(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .max()
            .map_or(0, |width| width.saturating_sub(1))
    }

    pub fn num_equations(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Solve the system, yielding one [`crate::Value`] per variable or
    /// [`SolveError::Inconsistent`] if the equations contradict each other.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        crate::solve::solve(&self.rows)
    }
}

impl Extend<Vec<f64>> for LinearSystem {
    fn extend<T: IntoIterator<Item = Vec<f64>>>(&mut self, iter: T) {
        self.rows.extend(iter);
    }
}

impl FromIterator<Vec<f64>> for LinearSystem {
    fn from_iter<T: IntoIterator<Item = Vec<f64>>>(iter: T) -> Self {
        LinearSystem {
            rows: Vec::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type IntoIter = <&'a [Vec<f64>] as IntoIterator>::IntoIter;
    type Item = &'a Vec<f64>;

    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

impl IntoIterator for LinearSystem {
    type IntoIter = <Vec<Vec<f64>> as IntoIterator>::IntoIter;
    type Item = Vec<f64>;

    fn into_iter(self) -> Self::IntoIter { self.rows.into_iter() }
}
