//! Precedence-aware rendering of expression trees.
//!
//! An operand is parenthesized when its rank binds looser than the node
//! it sits in; an operand in an inverse slot (subtrahend or divisor)
//! already at equal rank, so `a - (b - c)` and `a/(b*c)` stay
//! unambiguous.

use std::fmt;

use num_traits::{One, Zero};

use crate::expr::{Expr, ProductNode, SumNode};

/// Rank of the atomic leaves (constants and variables).
const ATOM_RANK: u8 = 255;
/// Rank of the additive ring node.
const SUM_RANK: u8 = 1;
/// Rank of the multiplicative ring node.
const PRODUCT_RANK: u8 = 2;

impl Expr {
    /// Precedence rank of this node; higher binds tighter.
    #[must_use]
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => ATOM_RANK,
            Expr::Sum(_) => SUM_RANK,
            Expr::Product(_) => PRODUCT_RANK,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, rank: u8, inverse: bool) -> fmt::Result {
    let parenthesized = if inverse {
        operand.precedence() <= rank
    } else {
        operand.precedence() < rank
    };
    if parenthesized {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(interval) => write!(f, "{interval}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Sum(node) => node.fmt(f),
            Expr::Product(node) => node.fmt(f),
        }
    }
}

impl fmt::Display for SumNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if !self.offset.is_zero() || self.terms.is_empty() {
            write!(f, "{}", self.offset)?;
            wrote = true;
        }
        for term in &self.terms {
            if wrote {
                f.write_str(" + ")?;
            }
            write_operand(f, term, SUM_RANK, false)?;
            wrote = true;
        }
        for term in &self.negated {
            f.write_str(" - ")?;
            write_operand(f, term, SUM_RANK, true)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProductNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if !self.scale.is_one() || self.factors.is_empty() {
            write!(f, "{}", self.scale)?;
            wrote = true;
        }
        for factor in &self.factors {
            if wrote {
                f.write_str("*")?;
            }
            write_operand(f, factor, PRODUCT_RANK, false)?;
            wrote = true;
        }
        for divisor in &self.divisors {
            f.write_str("/")?;
            write_operand(f, divisor, PRODUCT_RANK, true)?;
        }
        Ok(())
    }
}
