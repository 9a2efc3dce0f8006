//! Expression tree types and value-consuming construction.

use std::collections::BTreeSet;
use std::ops::{Add, Div, Mul, Sub};
use std::sync::LazyLock;

use num_traits::{One, Zero};
use regex::Regex;
use spatium_intervals::Interval;

use crate::error::AlgebraError;

/// Identifier grammar for variables: letters and digits, starting with a
/// letter. Compiled once on first use.
static VARIABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z][A-Za-z0-9]*$").expect("valid regex literal"));

/// A node of the expression tree.
///
/// The tree is exclusively owned: every combinator consumes its operands
/// by value, so a subexpression can never be shared between two trees
/// and cycles are impossible by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A constant interval leaf.
    Constant(Interval),
    /// A named variable leaf, substituted during solve when bound.
    Variable(String),
    /// An additive ring node: `offset + Σterms − Σnegated`.
    Sum(SumNode),
    /// A multiplicative ring node: `scale · Πfactors / Πdivisors`.
    Product(ProductNode),
}

/// The additive ring node.
///
/// The constant accumulator absorbs every folded constant operand;
/// subtracted operands live in their own list rather than in a separate
/// negation subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumNode {
    pub(crate) offset: Interval,
    pub(crate) terms: Vec<Expr>,
    pub(crate) negated: Vec<Expr>,
}

/// The multiplicative ring node, mirror of [`SumNode`] with a scale
/// accumulator and a divisor list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductNode {
    pub(crate) scale: Interval,
    pub(crate) factors: Vec<Expr>,
    pub(crate) divisors: Vec<Expr>,
}

impl SumNode {
    /// The accumulated constant offset.
    #[must_use]
    pub fn offset(&self) -> &Interval {
        &self.offset
    }

    /// The added operands.
    #[must_use]
    pub fn terms(&self) -> &[Expr] {
        &self.terms
    }

    /// The subtracted operands.
    #[must_use]
    pub fn negated(&self) -> &[Expr] {
        &self.negated
    }
}

impl ProductNode {
    /// The accumulated constant scale.
    #[must_use]
    pub fn scale(&self) -> &Interval {
        &self.scale
    }

    /// The multiplied operands.
    #[must_use]
    pub fn factors(&self) -> &[Expr] {
        &self.factors
    }

    /// The dividing operands.
    #[must_use]
    pub fn divisors(&self) -> &[Expr] {
        &self.divisors
    }
}

impl Expr {
    /// Creates a constant leaf from an interval.
    #[must_use]
    pub fn constant(interval: Interval) -> Self {
        Expr::Constant(interval)
    }

    /// Creates a variable leaf.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidVariableName`] unless the name is
    /// letters and digits starting with a letter.
    pub fn variable(name: impl Into<String>) -> Result<Self, AlgebraError> {
        let name = name.into();
        if VARIABLE_NAME.is_match(&name) {
            Ok(Expr::Variable(name))
        } else {
            Err(AlgebraError::InvalidVariableName(name))
        }
    }

    /// Adds every expression of an iterator; empty input yields the
    /// zero-interval constant.
    #[must_use]
    pub fn sum<I: IntoIterator<Item = Self>>(terms: I) -> Self {
        let mut terms = terms.into_iter();
        match terms.next() {
            Some(first) => terms.fold(first, Add::add),
            None => Expr::Constant(Interval::zero()),
        }
    }

    /// Multiplies every expression of an iterator; empty input yields
    /// the one-interval constant.
    #[must_use]
    pub fn product<I: IntoIterator<Item = Self>>(factors: I) -> Self {
        let mut factors = factors.into_iter();
        match factors.next() {
            Some(first) => factors.fold(first, Mul::mul),
            None => Expr::Constant(Interval::one()),
        }
    }

    /// Returns the constant interval if this is a constant leaf.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Interval> {
        match self {
            Expr::Constant(interval) => Some(interval),
            _ => None,
        }
    }

    /// Collects the names of all variables in the tree, sorted.
    ///
    /// A partial solve leaves exactly the variables absent from its
    /// bindings; this is the query for what is still unbound.
    #[must_use]
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(name) => {
                names.insert(name.as_str());
            }
            Expr::Sum(node) => {
                for child in node.terms.iter().chain(&node.negated) {
                    child.collect_variables(names);
                }
            }
            Expr::Product(node) => {
                for child in node.factors.iter().chain(&node.divisors) {
                    child.collect_variables(names);
                }
            }
        }
    }
}

impl From<Interval> for Expr {
    fn from(interval: Interval) -> Self {
        Expr::Constant(interval)
    }
}

// Construction operators. Each consumes both operands: a combined
// subexpression cannot be reused, so trees never share nodes. Adding
// onto an existing ring node of the same shape extends its operand
// lists; a constant left operand seeds the accumulator directly.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self {
            Expr::Sum(mut node) => {
                node.terms.push(rhs);
                Expr::Sum(node)
            }
            Expr::Constant(interval) => Expr::Sum(SumNode {
                offset: interval,
                terms: vec![rhs],
                negated: Vec::new(),
            }),
            other => Expr::Sum(SumNode {
                offset: Interval::zero(),
                terms: vec![other, rhs],
                negated: Vec::new(),
            }),
        }
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self {
            Expr::Sum(mut node) => {
                node.negated.push(rhs);
                Expr::Sum(node)
            }
            Expr::Constant(interval) => Expr::Sum(SumNode {
                offset: interval,
                terms: Vec::new(),
                negated: vec![rhs],
            }),
            other => Expr::Sum(SumNode {
                offset: Interval::zero(),
                terms: vec![other],
                negated: vec![rhs],
            }),
        }
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self {
            Expr::Product(mut node) => {
                node.factors.push(rhs);
                Expr::Product(node)
            }
            Expr::Constant(interval) => Expr::Product(ProductNode {
                scale: interval,
                factors: vec![rhs],
                divisors: Vec::new(),
            }),
            other => Expr::Product(ProductNode {
                scale: Interval::one(),
                factors: vec![other, rhs],
                divisors: Vec::new(),
            }),
        }
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self {
            Expr::Product(mut node) => {
                node.divisors.push(rhs);
                Expr::Product(node)
            }
            Expr::Constant(interval) => Expr::Product(ProductNode {
                scale: interval,
                factors: Vec::new(),
                divisors: vec![rhs],
            }),
            other => Expr::Product(ProductNode {
                scale: Interval::one(),
                factors: vec![other],
                divisors: vec![rhs],
            }),
        }
    }
}
