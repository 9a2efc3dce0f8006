//! Arbitrary precision rationals with extended values.
//!
//! Every value is a reduced `(numerator, denominator)` pair of `dashu`
//! big integers. A zero denominator encodes the extended values, so the
//! four arithmetic operations are total: `1/0 = Inf`, `-1/0 = -Inf`,
//! `0/0 = NaN`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use thiserror::Error;

/// Errors that can occur while parsing a rational literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input is not a valid decimal or fraction literal.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
}

/// An arbitrary precision rational number with extended values.
///
/// Rationals are always stored in lowest terms with the sign on the
/// numerator. Equality is structural, which makes `NaN` equal to itself;
/// ordering is total over everything except `NaN` (see [`Rational::compare`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: IBig,
    den: IBig,
}

impl Rational {
    /// Creates a rational from a numerator and denominator, reducing to
    /// canonical form.
    ///
    /// A zero denominator is not an error: the result is `Inf`, `-Inf` or
    /// `NaN` by the sign of the numerator.
    #[must_use]
    pub fn new(numerator: IBig, denominator: IBig) -> Self {
        Self::from_parts(numerator, denominator)
    }

    /// Creates a rational from i64 numerator and denominator.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::from_parts(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: impl Into<IBig>) -> Self {
        Self {
            num: n.into(),
            den: IBig::ONE,
        }
    }

    /// The positive infinity encoding `(1, 0)`.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            num: IBig::ONE,
            den: IBig::ZERO,
        }
    }

    /// The negative infinity encoding `(-1, 0)`.
    #[must_use]
    pub fn neg_infinity() -> Self {
        Self {
            num: IBig::from(-1),
            den: IBig::ZERO,
        }
    }

    /// The not-a-number encoding `(0, 0)`.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            num: IBig::ZERO,
            den: IBig::ZERO,
        }
    }

    /// Parses a decimal literal into an exact fraction.
    ///
    /// The fractional digits are counted and the value scaled by the
    /// matching power of ten, so `"0.125"` becomes `1/8` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRationalError::MalformedNumber`] if the input is not
    /// an optionally signed decimal literal.
    pub fn from_decimal_str(text: &str) -> Result<Self, ParseRationalError> {
        let malformed = || ParseRationalError::MalformedNumber(text.to_string());
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) if !f.is_empty() => (i, f),
            Some(_) => return Err(malformed()),
            None => (digits, ""),
        };
        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let mut scaled = String::with_capacity(int_part.len() + frac_part.len());
        scaled.push_str(int_part);
        scaled.push_str(frac_part);
        let num = IBig::from_str_radix(&scaled, 10).map_err(|_| malformed())?;
        let den = IBig::from(10).pow(frac_part.len());
        Ok(Self::from_parts(if negative { -num } else { num }, den))
    }

    /// Returns a reference to the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.num
    }

    /// Returns a reference to the denominator.
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.den
    }

    /// Returns true if this is the `NaN` encoding.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.den == IBig::ZERO && self.num == IBig::ZERO
    }

    /// Returns true if this is `Inf` or `-Inf`.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.den == IBig::ZERO && self.num != IBig::ZERO
    }

    /// Returns true if this is an ordinary fraction.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.den != IBig::ZERO
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den == IBig::ONE
    }

    /// Returns true if negative (including `-Inf`).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.num)
    }

    /// Returns the sign: -1, 0, or 1. `NaN` has sign 0.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.num == IBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.num) {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.clone().abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the reciprocal.
    ///
    /// Total over the extended domain: `recip(0) = Inf`, `recip(Inf) = 0`,
    /// `recip(NaN) = NaN`.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::from_parts(self.den.clone(), self.num.clone())
    }

    /// Compares two rationals.
    ///
    /// `-Inf` is below every finite value and `Inf` above; finite values
    /// compare by exact cross-multiplication. `NaN` compares equal to
    /// `NaN` and to nothing else.
    ///
    /// # Panics
    ///
    /// Panics when exactly one side is `NaN`: such a pair has no order,
    /// and returning one silently would corrupt any bound normalization
    /// built on top of this. Use `partial_cmp` to probe instead.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (false, false) => {}
            _ => panic!("cannot order NaN against a non-NaN rational"),
        }
        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => self.num.cmp(&other.num),
            (true, false) => {
                if self.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => other.compare(self).reverse(),
            (false, false) => (&self.num * &other.den).cmp(&(&other.num * &self.den)),
        }
    }

    /// Returns the smaller of two rationals by [`Rational::compare`].
    ///
    /// # Panics
    ///
    /// Panics when exactly one operand is `NaN`.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.compare(&other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two rationals by [`Rational::compare`].
    ///
    /// # Panics
    ///
    /// Panics when exactly one operand is `NaN`.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.compare(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Reduces a raw pair to canonical form.
    fn from_parts(mut num: IBig, mut den: IBig) -> Self {
        if den == IBig::ZERO {
            // Extended encodings keep only the numerator's sign.
            let sign = if DashuSigned::is_positive(&num) {
                IBig::ONE
            } else if DashuSigned::is_negative(&num) {
                IBig::from(-1)
            } else {
                IBig::ZERO
            };
            return Self {
                num: sign,
                den: IBig::ZERO,
            };
        }
        if DashuSigned::is_negative(&den) {
            num = -num;
            den = -den;
        }
        let g = IBig::from(num.clone().gcd(den.clone()));
        if g != IBig::ONE {
            num = &num / &g;
            den = &den / &g;
        }
        Self { num, den }
    }

    fn add_impl(lhs: &Self, rhs: &Self) -> Self {
        if lhs.is_infinite() && rhs.is_infinite() {
            // Same-signed infinities are preserved; opposite signs cancel
            // into NaN. The cross-multiplied form below would lose this.
            return if lhs.num == rhs.num {
                lhs.clone()
            } else {
                Self::nan()
            };
        }
        Self::from_parts(
            &lhs.num * &rhs.den + &rhs.num * &lhs.den,
            &lhs.den * &rhs.den,
        )
    }

    fn mul_impl(lhs: &Self, rhs: &Self) -> Self {
        if lhs.is_infinite() && rhs.is_infinite() && lhs.num != rhs.num {
            // An opposite-signed infinite product is indeterminate here,
            // not -Inf.
            return Self::nan();
        }
        Self::from_parts(&lhs.num * &rhs.num, &lhs.den * &rhs.den)
    }

    fn div_impl(lhs: &Self, rhs: &Self) -> Self {
        // (a/b) / (c/d) = (a*d) / (b*c); the canonicalization in
        // from_parts yields exactly 0 for finite/Inf and NaN for Inf/Inf.
        Self::from_parts(&lhs.num * &rhs.den, &lhs.den * &rhs.num)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            num: IBig::ZERO,
            den: IBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.num == IBig::ZERO && self.den == IBig::ONE
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            num: IBig::ONE,
            den: IBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.num == IBig::ONE && self.den == IBig::ONE
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) | (false, true) => None,
            (false, false) => Some(self.compare(other)),
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            f.write_str("NaN")
        } else if self.is_infinite() {
            if self.is_negative() {
                f.write_str("-Inf")
            } else {
                f.write_str("Inf")
            }
        } else if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{} / {}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRationalError::MalformedNumber(s.to_string());
        let text = s.trim();
        match text {
            "Inf" => return Ok(Self::infinity()),
            "-Inf" => return Ok(Self::neg_infinity()),
            "NaN" => return Ok(Self::nan()),
            _ => {}
        }
        if let Some((num_text, den_text)) = text.split_once('/') {
            let num = IBig::from_str_radix(num_text.trim(), 10).map_err(|_| malformed())?;
            let den = IBig::from_str_radix(den_text.trim(), 10).map_err(|_| malformed())?;
            return Ok(Self::from_parts(num, den));
        }
        Self::from_decimal_str(text).map_err(|_| malformed())
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add_impl(&self, &rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self::add_impl(&self, rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::add_impl(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::add_impl(&self, &-rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self::add_impl(&self, &-rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::add_impl(self, &-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::mul_impl(&self, &rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self::mul_impl(&self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::mul_impl(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::div_impl(&self, &rhs)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        Self::div_impl(&self, rhs)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational::div_impl(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}
