//! # spatium-rationals
//!
//! Arbitrary precision rational numbers with extended values for Spatium.
//!
//! This crate provides the numeric foundation of the interval evaluator:
//! exact fractions over `dashu` big integers, closed under the four
//! arithmetic operations together with the extended values `+Inf`, `-Inf`
//! and `NaN`.
//!
//! ## Encoding
//!
//! A rational is a reduced pair of big integers with a non-negative
//! denominator. The three extended values reuse the pair with a zero
//! denominator: `+Inf = (1, 0)`, `-Inf = (-1, 0)`, `NaN = (0, 0)`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational};
