//! # Fractus
//!
//! Exact mixed-number rational arithmetic.
//!
//! Fractus represents numbers as a whole part plus a proper fraction,
//! kept in a reduced, sign-canonical form, and performs all arithmetic
//! in exact machine-integer math.
//!
//! ## Quick Start
//!
//! ```rust
//! use fractus::prelude::*;
//!
//! let x = Rational::new(15, 0, 1)?;
//! let sum = x.add(Rational::new(0, 3, 4)?)?;
//! assert_eq!(sum.to_string(), "15 ³/₄");
//! assert_eq!(sum.to_f64(), 15.75);
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fractus_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fractus_rational::{Operand, Rational, RationalError};
}
