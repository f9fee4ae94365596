//! # fractus-rational
//!
//! Exact mixed-number rational arithmetic for Fractus.
//!
//! This crate provides:
//! - Mixed-number rationals (`Rational`): a whole part plus a proper
//!   fraction, always held in reduced, sign-canonical form
//! - Exact machine-word arithmetic (`add`, `subtract`, `multiply`,
//!   `divide`) over rational and plain-integer operands
//!
//! ## Canonical form
//!
//! Every `Rational` satisfies the same invariants after construction:
//! positive denominator, fully reduced fraction, fraction magnitude
//! strictly below one, and a single unambiguous sign shared by the whole
//! and fractional parts. Arithmetic never observes or produces a
//! non-canonical value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{Operand, Rational, RationalError};
