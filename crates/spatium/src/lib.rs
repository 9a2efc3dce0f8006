//! # Spatium
//!
//! A symbolic interval-arithmetic evaluator.
//!
//! Spatium builds algebraic expressions whose atoms are constant numeric
//! intervals or named variables, combines them with `+ - * /`, and later
//! solves the expression against a binding of variable names to concrete
//! intervals, producing a further-simplified symbolic expression, or a
//! fully folded interval when every variable is bound.
//!
//! ## Layers
//!
//! - **Rationals**: arbitrary precision fractions with the extended
//!   values `Inf`, `-Inf` and `NaN`.
//! - **Intervals**: closed rational-bounded intervals with elementwise
//!   addition/subtraction and four-corner multiplication/division.
//! - **Algebra**: the expression ring with constant folding, variable
//!   substitution and precedence-aware rendering.
//!
//! ## Quick Start
//!
//! ```
//! use spatium::prelude::*;
//!
//! let x = Expr::variable("x")?;
//! let expr = (x + Expr::constant(Interval::from_i64(1, 4)))
//!     * Expr::constant(Interval::from_i64(2, 2));
//!
//! let mut bindings = Bindings::new();
//! bindings.insert("x", Interval::from_i64(2, 5));
//!
//! assert_eq!(expr.solve(&bindings)?.to_string(), "[6, 18]");
//! # Ok::<(), AlgebraError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use spatium_algebra as algebra;
pub use spatium_intervals as intervals;
pub use spatium_rationals as rationals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use spatium_algebra::{AlgebraError, Bindings, Expr};
    pub use spatium_intervals::{DivisionByZero, Interval};
    pub use spatium_rationals::Rational;
}
