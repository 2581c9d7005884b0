use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// A variable in a linear system, identified by its zero-based column index.
///
/// Variables carry no name of their own. A name is only materialized (as
/// `X<index>`) when a variable stays free in a solution and has to appear
/// symbolically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
    pub const fn new(index: usize) -> Self { Variable(index) }

    pub const fn index(self) -> usize { self.0 }

    /// The symbol this variable renders as, e.g. `X2`.
    pub fn name(self) -> SmolStr { SmolStr::new(format!("X{}", self.0)) }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "X{}", self.0)
    }
}

/// A linear combination of free variables plus a constant offset.
///
/// This is the structured form of things like `-4*X2 + 2`; callers who want
/// a rendered string get one via [`Display`], everyone else reads the
/// coefficients directly.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearExpression {
    terms: Vec<(f64, Variable)>,
    constant: f64,
}

impl LinearExpression {
    pub fn new(terms: Vec<(f64, Variable)>, constant: f64) -> Self {
        LinearExpression { terms, constant }
    }

    /// The expression a free variable gets: itself, with coefficient 1.
    pub fn identity(variable: Variable) -> Self {
        LinearExpression {
            terms: vec![(1.0, variable)],
            constant: 0.0,
        }
    }

    /// The `(coefficient, variable)` terms, in ascending variable order.
    pub fn terms(&self) -> &[(f64, Variable)] { &self.terms }

    pub fn constant(&self) -> f64 { self.constant }

    /// `true` if this is the plain `1*X<i>` expression of a free variable.
    pub fn is_identity(&self) -> bool {
        self.constant == 0.0
            && matches!(self.terms.as_slice(), [(coefficient, _)] if *coefficient == 1.0)
    }
}

impl Display for LinearExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut leading = true;

        for &(coefficient, variable) in &self.terms {
            if leading {
                if coefficient < 0.0 {
                    write!(f, "-")?;
                }
            } else if coefficient < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = coefficient.abs();
            if magnitude == 1.0 {
                write!(f, "{}", variable)?;
            } else {
                write!(f, "{}*{}", magnitude, variable)?;
            }
            leading = false;
        }

        if leading {
            write!(f, "{}", self.constant)
        } else if self.constant < 0.0 {
            write!(f, " - {}", -self.constant)
        } else if self.constant > 0.0 {
            write!(f, " + {}", self.constant)
        } else {
            Ok(())
        }
    }
}

/// The closed-form value of a single variable in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The variable is fully determined.
    Number(f64),
    /// The variable is free, or depends on one or more free variables.
    Expression(LinearExpression),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            Value::Expression(_) => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Value::Expression(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{}", value),
            Value::Expression(expression) => write!(f, "{}", expression),
        }
    }
}
