//! Closed intervals with rational bounds.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use smallvec::SmallVec;
use spatium_rationals::Rational;
use thiserror::Error;

/// Error returned when the divisor interval has a zero bound.
///
/// Interval division by a zero-touching divisor is mathematically
/// unbounded, so it is reported as a distinct failure instead of being
/// folded into the extended-value arithmetic of the rational layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by an interval with a zero bound")]
pub struct DivisionByZero;

/// A closed interval with rational bounds.
///
/// Construction does not require the bounds to be ordered; every
/// arithmetic operation normalizes its result so `lo <= hi` holds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: Rational,
    hi: Rational,
}

impl Interval {
    /// Creates an interval from two bounds, in either order.
    #[must_use]
    pub fn new(lo: Rational, hi: Rational) -> Self {
        Self { lo, hi }
    }

    /// Creates the degenerate interval `[bound, bound]`.
    #[must_use]
    pub fn point(bound: Rational) -> Self {
        Self {
            lo: bound.clone(),
            hi: bound,
        }
    }

    /// Creates an interval with integer bounds.
    #[must_use]
    pub fn from_i64(lo: i64, hi: i64) -> Self {
        Self {
            lo: Rational::from(lo),
            hi: Rational::from(hi),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> &Rational {
        &self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> &Rational {
        &self.hi
    }

    /// Returns true if either bound is exactly zero.
    ///
    /// This is the divisor guard for [`Interval::div`].
    #[must_use]
    pub fn has_zero_bound(&self) -> bool {
        self.lo.is_zero() || self.hi.is_zero()
    }

    /// Returns the interval with its bounds ordered.
    ///
    /// # Panics
    ///
    /// Panics if exactly one bound is `NaN`, which has no order.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.lo.compare(&self.hi) == Ordering::Greater {
            Self {
                lo: self.hi,
                hi: self.lo,
            }
        } else {
            self
        }
    }

    /// Divides by another interval with the four-corner rule.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if either bound of the divisor is
    /// exactly zero.
    ///
    /// # Panics
    ///
    /// Panics if a corner quotient comparison involves `NaN` (possible
    /// only with extended bounds, e.g. `Inf / Inf` corners).
    pub fn div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        if rhs.has_zero_bound() {
            return Err(DivisionByZero);
        }
        Ok(Self::from_corners([
            &self.lo / &rhs.lo,
            &self.lo / &rhs.hi,
            &self.hi / &rhs.lo,
            &self.hi / &rhs.hi,
        ]))
    }

    /// Builds the enclosing interval of four corner values.
    fn from_corners(corners: [Rational; 4]) -> Self {
        let corners: SmallVec<[Rational; 4]> = SmallVec::from(corners);
        let mut lo = corners[0].clone();
        let mut hi = lo.clone();
        for corner in &corners[1..] {
            lo = lo.min(corner.clone());
            hi = hi.max(corner.clone());
        }
        Self { lo, hi }
    }
}

impl Zero for Interval {
    fn zero() -> Self {
        Self::point(Rational::zero())
    }

    fn is_zero(&self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }
}

impl One for Interval {
    fn one() -> Self {
        Self::point(Rational::one())
    }

    fn is_one(&self) -> bool {
        self.lo.is_one() && self.hi.is_one()
    }
}

impl From<Rational> for Interval {
    fn from(bound: Rational) -> Self {
        Self::point(bound)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval({self})")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

// Arithmetic operations. Addition and subtraction are elementwise on the
// bounds; multiplication takes the envelope of the four corner products.
impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add for &Interval {
    type Output = Interval;

    fn add(self, rhs: Self) -> Self::Output {
        Interval {
            lo: &self.lo + &rhs.lo,
            hi: &self.hi + &rhs.hi,
        }
        .normalized()
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub for &Interval {
    type Output = Interval;

    fn sub(self, rhs: Self) -> Self::Output {
        Interval {
            lo: &self.lo - &rhs.lo,
            hi: &self.hi - &rhs.hi,
        }
        .normalized()
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &Interval {
    type Output = Interval;

    fn mul(self, rhs: Self) -> Self::Output {
        Interval::from_corners([
            &self.lo * &rhs.lo,
            &self.lo * &rhs.hi,
            &self.hi * &rhs.lo,
            &self.hi * &rhs.hi,
        ])
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
        .normalized()
    }
}

impl Neg for &Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        Interval {
            lo: -&self.hi,
            hi: -&self.lo,
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_elementwise() {
        let a = Interval::from_i64(1, 4);
        let b = Interval::from_i64(2, 5);
        assert_eq!(&a + &b, Interval::from_i64(3, 9));
    }

    #[test]
    fn test_sub_elementwise() {
        // Bounds subtract pairwise (lo - lo, hi - hi), not crosswise.
        let a = Interval::from_i64(1, 4);
        let b = Interval::from_i64(0, 2);
        assert_eq!(&a - &b, Interval::from_i64(1, 2));
    }

    #[test]
    fn test_result_bounds_are_reordered() {
        let swapped = Interval::from_i64(4, 1);
        let sum = &swapped + &Interval::zero();
        assert_eq!(sum, Interval::from_i64(1, 4));
    }

    #[test]
    fn test_mul_four_corners() {
        assert_eq!(
            &Interval::from_i64(0, 1) * &Interval::from_i64(2, 0),
            Interval::from_i64(0, 2)
        );
        assert_eq!(
            &Interval::from_i64(-2, 3) * &Interval::from_i64(4, 5),
            Interval::from_i64(-10, 15)
        );
        assert_eq!(
            &Interval::from_i64(-2, -1) * &Interval::from_i64(-3, 5),
            Interval::from_i64(-10, 6)
        );
    }

    #[test]
    fn test_mul_with_infinite_bounds() {
        let unbounded = Interval::new(Rational::from_i64(1, 1), Rational::infinity());
        let result = &unbounded * &Interval::from_i64(2, 3);
        assert_eq!(result.lo(), &Rational::from_i64(2, 1));
        assert_eq!(result.hi(), &Rational::infinity());
    }

    #[test]
    #[should_panic(expected = "cannot order NaN")]
    fn mul_with_indeterminate_corner_panics() {
        // 0 * Inf is NaN, which cannot be ordered against the other corners.
        let zero_touching = Interval::from_i64(0, 5);
        let unbounded = Interval::new(Rational::infinity(), Rational::infinity());
        let _ = &zero_touching * &unbounded;
    }

    #[test]
    fn test_div() {
        let a = Interval::from_i64(0, 1);
        let b = Interval::from_i64(2, 5);
        let q = a.div(&b).unwrap();
        assert_eq!(
            q,
            Interval::new(Rational::zero(), Rational::from_i64(1, 2))
        );
    }

    #[test]
    fn test_div_by_zero_bound_fails() {
        let a = Interval::from_i64(1, 2);
        assert_eq!(a.div(&Interval::from_i64(0, 5)), Err(DivisionByZero));
        assert_eq!(a.div(&Interval::from_i64(5, 0)), Err(DivisionByZero));
        assert_eq!(a.div(&Interval::zero()), Err(DivisionByZero));
    }

    #[test]
    fn test_div_by_negative_straddle_is_defined() {
        // [-1, 1] straddles zero but neither bound is zero, so the
        // four-corner rule applies as usual.
        let a = Interval::from_i64(2, 4);
        let q = a.div(&Interval::from_i64(-1, 1)).unwrap();
        assert_eq!(q, Interval::from_i64(-4, 4));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Interval::from_i64(1, 4), Interval::from_i64(-4, -1));
    }

    #[test]
    fn test_neutral_elements() {
        assert!(Interval::zero().is_zero());
        assert!(Interval::one().is_one());
        assert!(!Interval::from_i64(0, 1).is_zero());
        let a = Interval::from_i64(-3, 7);
        assert_eq!(&a + &Interval::zero(), a);
        assert_eq!(&a * &Interval::one(), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::from_i64(0, 1).to_string(), "[0, 1]");
        assert_eq!(
            Interval::new(Rational::from_i64(-35, 6), Rational::infinity()).to_string(),
            "[-35 / 6, Inf]"
        );
    }
}
