//! A solver for systems of linear equations over `f64`.
//!
//! Systems are given as augmented matrices and reduced with Gauss-Jordan
//! elimination (partial pivoting, fixed zero tolerance). A system either has
//! a unique solution, an infinite family of solutions described in terms of
//! free variables, or no solution at all, and all three outcomes are
//! reported as values rather than panics.
//!
//! ```
//! use linsolve::{LinearSystem, Value};
//!
//! // X0 - 2*X1 = 4
//! // -2*X0 + 3*X1 = 0
//! let solution = LinearSystem::new()
//!     .with(vec![1.0, -2.0, 4.0])
//!     .with(vec![-2.0, 3.0, 0.0])
//!     .solve()
//!     .unwrap();
//!
//! assert_eq!(
//!     solution.values(),
//!     &[Value::Number(-12.0), Value::Number(-8.0)],
//! );
//! ```
//!
//! Underdetermined systems come back with structured [`LinearExpression`]s
//! instead of numbers, leaving any rendering to the caller:
//!
//! ```
//! use linsolve::{LinearSystem, Variable};
//!
//! // X1 + 4*X2 = 2, with X0 and X2 unconstrained
//! let solution = LinearSystem::from_rows(vec![vec![0.0, 1.0, 4.0, 2.0]])
//!     .solve()
//!     .unwrap();
//!
//! assert_eq!(solution.values()[1].to_string(), "-4*X2 + 2");
//! assert_eq!(
//!     solution.free_variables().collect::<Vec<_>>(),
//!     vec![Variable::new(0), Variable::new(2)],
//! );
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod expr;
mod solve;
mod system;

pub use expr::{LinearExpression, Value, Variable};
pub use solve::{Solution, SolveError, TOLERANCE};
pub use system::LinearSystem;
