//! # spatium-intervals
//!
//! Interval arithmetic over the extended rationals of `spatium-rationals`.
//!
//! An [`Interval`] is a closed pair of rational bounds. Addition and
//! subtraction work elementwise on the bounds, multiplication and division
//! follow the four-corner rule, and every result is normalized so its
//! bounds are ordered. Division by an interval with a zero bound is a
//! fatal, typed error rather than a silent excursion into the extended
//! values.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod interval;

#[cfg(test)]
mod proptests;

pub use interval::{DivisionByZero, Interval};
