//! # spatium-algebra
//!
//! The expression ring of the Spatium interval evaluator.
//!
//! Expressions are owned trees whose leaves are constant intervals or
//! named variables, combined through two ring-shaped node kinds: a sum
//! node (`offset + Σterms − Σnegated`) and a product node
//! (`scale · Πfactors / Πdivisors`). Carrying the inverse operands as a
//! second list makes subtraction and division O(1) constructions instead
//! of separate tree shapes.
//!
//! [`Expr::solve`] substitutes bound variables and folds every constant
//! subtree, flattening nested nodes of the same shape, until the tree is
//! in normal form: a bare constant, or a ring node with nothing left to
//! fold. Solving an already-solved tree returns an equal tree.
//!
//! ## Example
//!
//! ```
//! use spatium_algebra::{Bindings, Expr};
//! use spatium_intervals::Interval;
//!
//! let x = Expr::variable("x")?;
//! let expr = x + Expr::constant(Interval::from_i64(1, 4));
//!
//! let mut bindings = Bindings::new();
//! bindings.insert("x", Interval::from_i64(2, 5));
//!
//! let solved = expr.solve(&bindings)?;
//! assert_eq!(solved, Expr::constant(Interval::from_i64(3, 9)));
//! # Ok::<(), spatium_algebra::AlgebraError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expr;
pub mod solve;

mod display;

pub use error::AlgebraError;
pub use expr::{Expr, ProductNode, SumNode};
pub use solve::Bindings;
