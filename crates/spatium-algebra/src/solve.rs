//! Variable substitution and constant folding.

use num_traits::Zero;
use rustc_hash::FxHashMap;
use spatium_intervals::Interval;

use crate::error::AlgebraError;
use crate::expr::{Expr, ProductNode, SumNode};

/// The substitution map consumed during solve: variable name to interval.
///
/// Bindings are caller-owned and read-only while solving; a variable
/// absent from the map stays symbolic in the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    map: FxHashMap<String, Interval>,
}

impl Bindings {
    /// Creates an empty bindings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable name to an interval, returning the previous
    /// binding if one existed.
    pub fn insert(&mut self, name: impl Into<String>, interval: Interval) -> Option<Interval> {
        self.map.insert(name.into(), interval)
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Interval> {
        self.map.get(name)
    }

    /// Returns true if the name is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Interval)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, Interval)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(name, interval)| (name.into(), interval))
                .collect(),
        }
    }
}

impl Expr {
    /// Substitutes bound variables and folds every constant subtree.
    ///
    /// The result is in normal form: a bare constant when everything
    /// folded away, otherwise a ring node whose constant operands are
    /// merged into its accumulator and whose same-shaped children are
    /// spliced into its operand lists. Solving a tree already in normal
    /// form returns an equal tree, so the operation is idempotent.
    ///
    /// The original tree is left untouched; variables missing from the
    /// bindings stay symbolic in the result.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when a divisor folds to
    /// an interval with a zero bound.
    pub fn solve(&self, bindings: &Bindings) -> Result<Expr, AlgebraError> {
        match self {
            Expr::Constant(_) => Ok(self.clone()),
            Expr::Variable(name) => Ok(bindings
                .get(name)
                .map_or_else(|| self.clone(), |interval| Expr::Constant(interval.clone()))),
            Expr::Sum(node) => node.solve(bindings),
            Expr::Product(node) => node.solve(bindings),
        }
    }

    /// Solves with an empty bindings map, folding constants only.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when a divisor folds to
    /// an interval with a zero bound.
    pub fn normalize(&self) -> Result<Expr, AlgebraError> {
        self.solve(&Bindings::new())
    }

    /// Renders the canonical normal form: normalize, then display.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when normalization does.
    pub fn render(&self) -> Result<String, AlgebraError> {
        Ok(self.normalize()?.to_string())
    }
}

impl SumNode {
    fn solve(&self, bindings: &Bindings) -> Result<Expr, AlgebraError> {
        let mut offset = self.offset.clone();
        let mut terms = Vec::new();
        let mut negated = Vec::new();
        for term in &self.terms {
            match term.solve(bindings)? {
                Expr::Constant(value) => offset = &offset + &value,
                // A nested sum is associative with this one: splice its
                // lists instead of keeping it as an opaque child.
                Expr::Sum(inner) => {
                    offset = &offset + &inner.offset;
                    terms.extend(inner.terms);
                    negated.extend(inner.negated);
                }
                other => terms.push(other),
            }
        }
        for term in &self.negated {
            match term.solve(bindings)? {
                Expr::Constant(value) => offset = &offset - &value,
                // Subtracting a sum swaps its operand lists.
                Expr::Sum(inner) => {
                    offset = &offset - &inner.offset;
                    terms.extend(inner.negated);
                    negated.extend(inner.terms);
                }
                other => negated.push(other),
            }
        }
        if terms.is_empty() && negated.is_empty() {
            Ok(Expr::Constant(offset))
        } else {
            Ok(Expr::Sum(SumNode {
                offset,
                terms,
                negated,
            }))
        }
    }
}

impl ProductNode {
    fn solve(&self, bindings: &Bindings) -> Result<Expr, AlgebraError> {
        let mut scale = self.scale.clone();
        if scale.is_zero() {
            return Ok(Expr::Constant(Interval::zero()));
        }
        let mut factors = Vec::new();
        let mut divisors = Vec::new();
        for factor in &self.factors {
            match factor.solve(bindings)? {
                Expr::Constant(value) => scale = &scale * &value,
                Expr::Product(inner) => {
                    scale = &scale * &inner.scale;
                    factors.extend(inner.factors);
                    divisors.extend(inner.divisors);
                }
                other => {
                    factors.push(other);
                    continue;
                }
            }
            // A zero factor annihilates the whole product. Stop here:
            // whatever remains, divisors included, can no longer matter.
            if scale.is_zero() {
                return Ok(Expr::Constant(Interval::zero()));
            }
        }
        for divisor in &self.divisors {
            match divisor.solve(bindings)? {
                Expr::Constant(value) => scale = scale.div(&value)?,
                // Dividing by a product swaps its operand lists; its
                // scale divides ours, with the same zero-bound guard.
                Expr::Product(inner) => {
                    scale = scale.div(&inner.scale)?;
                    factors.extend(inner.divisors);
                    divisors.extend(inner.factors);
                }
                other => divisors.push(other),
            }
        }
        if factors.is_empty() && divisors.is_empty() {
            Ok(Expr::Constant(scale))
        } else {
            Ok(Expr::Product(ProductNode {
                scale,
                factors,
                divisors,
            }))
        }
    }
}
