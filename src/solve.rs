use crate::{LinearExpression, Value, Variable};
use nalgebra::DMatrix as Matrix;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Entries whose magnitude falls below this are treated as zero, both when
/// selecting pivots and when checking reduced rows for consistency.
pub const TOLERANCE: f64 = 1e-9;

pub(crate) fn solve(rows: &[Vec<f64>]) -> Result<Solution, SolveError> {
    let mut tableau = Tableau::new(rows);
    tableau.reduce();
    tableau.check_consistency()?;

    Ok(Solution {
        values: tableau.collate_values(),
    })
}

/// The solution set of a consistent system: one [`Value`] per variable, in
/// column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub(crate) values: Vec<Value>,
}

impl Solution {
    pub fn values(&self) -> &[Value] { &self.values }

    pub fn value(&self, variable: Variable) -> Option<&Value> {
        self.values.get(variable.index())
    }

    pub fn num_variables(&self) -> usize { self.values.len() }

    /// `true` when every variable came out as a plain number.
    pub fn is_unique(&self) -> bool {
        self.values.iter().all(|value| !value.is_symbolic())
    }

    /// The variables left free by elimination, i.e. those whose value is
    /// their own symbol.
    pub fn free_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.values.iter().enumerate().filter_map(|(index, value)| {
            match value {
                Value::Expression(expression) if expression.is_identity() => {
                    Some(Variable::new(index))
                },
                _ => None,
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The equations contradict each other; the system has no solution.
    Inconsistent,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Inconsistent => {
                write!(f, "The system of equations has no solution")
            },
        }
    }
}

impl Error for SolveError {}

/// The working copy of the augmented matrix plus the pivot bookkeeping built
/// up during elimination.
///
/// Rows are swapped so that pivot row `k` is always row `k`; `pivots[k]`
/// records the column it pivots on.
#[derive(Debug, Clone, PartialEq)]
struct Tableau {
    matrix: Matrix<f64>,
    pivots: Vec<usize>,
    variables: usize,
}

impl Tableau {
    /// Build the working matrix, normalizing ragged input.
    ///
    /// The widest row decides the variable count; shorter rows keep their
    /// last entry as the constant term and get zero coefficients for the
    /// columns they're missing.
    fn new(rows: &[Vec<f64>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let variables = width.saturating_sub(1);

        let matrix =
            Matrix::from_fn(rows.len(), variables + 1, |row, column| {
                match rows[row].split_last() {
                    Some((&constant, coefficients)) => {
                        if column == variables {
                            constant
                        } else {
                            coefficients.get(column).copied().unwrap_or(0.0)
                        }
                    },
                    None => 0.0,
                }
            });

        Tableau {
            matrix,
            pivots: Vec::new(),
            variables,
        }
    }

    /// Gauss-Jordan reduction with partial pivoting.
    ///
    /// Columns with no usable pivot are skipped without consuming a row;
    /// they become free variables. Every taken pivot is eliminated from
    /// *all* other rows, so no back-substitution across pivoted variables
    /// is needed afterwards.
    fn reduce(&mut self) {
        for column in 0..self.variables {
            let slot = self.pivots.len();

            let candidate = match self.pivot_candidate(column, slot) {
                Some(row) => row,
                None => continue,
            };

            self.matrix.swap_rows(slot, candidate);
            self.normalize_row(slot, column);
            self.eliminate_column(slot, column);
            self.pivots.push(column);
        }
    }

    /// Pick the not-yet-pivoted row with the largest magnitude in `column`,
    /// preferring the earliest row on ties. `None` if the best candidate is
    /// still within tolerance of zero.
    fn pivot_candidate(&self, column: usize, from: usize) -> Option<usize> {
        let mut best = None;
        let mut best_magnitude = 0.0;

        for row in from..self.matrix.nrows() {
            let magnitude = self.matrix[(row, column)].abs();
            if magnitude > best_magnitude {
                best_magnitude = magnitude;
                best = Some(row);
            }
        }

        if best_magnitude < TOLERANCE {
            None
        } else {
            best
        }
    }

    /// Scale `row` so its entry in `pivot_column` becomes 1.
    fn normalize_row(&mut self, row: usize, pivot_column: usize) {
        let pivot = self.matrix[(row, pivot_column)];

        for column in 0..self.matrix.ncols() {
            self.matrix[(row, column)] /= pivot;
        }
    }

    /// Drive `column` to zero in every row other than `pivot_row`.
    fn eliminate_column(&mut self, pivot_row: usize, column: usize) {
        for row in 0..self.matrix.nrows() {
            if row == pivot_row {
                continue;
            }

            let factor = self.matrix[(row, column)];
            if factor == 0.0 {
                continue;
            }

            for c in 0..self.matrix.ncols() {
                let value = self.matrix[(pivot_row, c)];
                self.matrix[(row, c)] -= factor * value;
            }
        }
    }

    /// A leftover row with all-zero coefficients but a nonzero constant says
    /// `0 = k`; no assignment of variables can satisfy it.
    fn check_consistency(&self) -> Result<(), SolveError> {
        for row in self.pivots.len()..self.matrix.nrows() {
            let coefficients_vanish = (0..self.variables).all(|column| {
                approx::abs_diff_eq!(
                    self.matrix[(row, column)],
                    0.0,
                    epsilon = TOLERANCE
                )
            });
            let constant = self.matrix[(row, self.variables)];

            if coefficients_vanish
                && !approx::abs_diff_eq!(constant, 0.0, epsilon = TOLERANCE)
            {
                return Err(SolveError::Inconsistent);
            }
        }

        Ok(())
    }

    fn free_columns(&self) -> Vec<usize> {
        (0..self.variables)
            .filter(|column| !self.pivots.contains(column))
            .collect()
    }

    /// Read one value per variable out of the reduced matrix.
    ///
    /// Free variables are their own symbol. A pivoted variable equals its
    /// row's constant minus the row's remaining coefficients, which (thanks
    /// to full Gauss-Jordan) can only sit on free columns.
    fn collate_values(&self) -> Vec<Value> {
        let free = self.free_columns();

        let mut values: Vec<_> = (0..self.variables)
            .map(|column| {
                Value::Expression(LinearExpression::identity(Variable::new(
                    column,
                )))
            })
            .collect();

        for (row, &pivot) in self.pivots.iter().enumerate() {
            let constant = self.matrix[(row, self.variables)];
            // Negative zero can fall out of the row arithmetic; emit it as
            // plain zero so it doesn't render as `-0`.
            let constant = if constant == 0.0 { 0.0 } else { constant };

            let terms: Vec<_> = free
                .iter()
                .map(|&column| (self.matrix[(row, column)], column))
                .filter(|(coefficient, _)| {
                    !approx::abs_diff_eq!(
                        *coefficient,
                        0.0,
                        epsilon = TOLERANCE
                    )
                })
                .map(|(coefficient, column)| {
                    (-coefficient, Variable::new(column))
                })
                .collect();

            values[pivot] = if terms.is_empty() {
                Value::Number(constant)
            } else {
                Value::Expression(LinearExpression::new(terms, constant))
            };
        }

        values
    }
}
