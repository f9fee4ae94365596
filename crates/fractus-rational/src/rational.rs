//! Mixed-number rational arithmetic.
//!
//! A [`Rational`] stores a whole part and a proper fraction as three
//! machine integers and keeps them in a single canonical form, so exact
//! arithmetic and structural equality both work without cross-multiplying.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer as _;
use num_traits::{One, Zero};
use thiserror::Error;

/// Errors produced by rational construction and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A denominator of zero was supplied at construction.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
    /// Division (or reciprocal) of a zero-valued rational was requested.
    #[error("division by a zero-valued rational")]
    DivisionByZero,
    /// An operand was not exactly representable as an integer or rational.
    #[error("operand is not an exact integer or rational")]
    InexactOperand,
}

/// An exact operand for rational arithmetic: a machine integer or
/// another [`Rational`].
///
/// The variants are deliberately closed over exact types. Floating-point
/// values never convert implicitly; the only way in from an `f64` is
/// [`TryFrom`], which always fails with [`RationalError::InexactOperand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A plain integer, treated as `value / 1`.
    Integer(i64),
    /// An already-normalized rational.
    Rational(Rational),
}

impl Operand {
    /// Collapses the operand to an improper `(numerator, denominator)`
    /// pair with a positive denominator.
    fn as_ratio(self) -> (i64, i64) {
        match self {
            Self::Integer(n) => (n, 1),
            Self::Rational(r) => r.as_ratio(),
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<Rational> for Operand {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl TryFrom<f64> for Operand {
    type Error = RationalError;

    /// Always fails: floats carry rounding and are never accepted as
    /// exact operands. Express the value as a [`Rational`] instead.
    fn try_from(_: f64) -> Result<Self, Self::Error> {
        Err(RationalError::InexactOperand)
    }
}

/// An exact mixed-number rational: a whole part plus a proper fraction.
///
/// Every value is normalized once at construction and never mutated:
/// the denominator is positive, the fraction is fully reduced with
/// `|numerator| < denominator`, the whole and fractional parts share one
/// sign, and zero is always `(0, 0, 1)`. Because the form is canonical,
/// the derived `PartialEq`/`Eq`/`Hash` compare by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    whole: i64,
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The zero value, `(0, 0, 1)`.
    pub const ZERO: Self = Self {
        whole: 0,
        numerator: 0,
        denominator: 1,
    };

    /// The unit value, `(1, 0, 1)`.
    pub const ONE: Self = Self {
        whole: 1,
        numerator: 0,
        denominator: 1,
    };

    /// Creates a rational from a whole part, numerator and denominator,
    /// normalizing to canonical form.
    ///
    /// The inputs need not be canonical: the denominator may be negative,
    /// the fraction improper, and the signs of the parts may disagree.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(whole: i64, numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        if denominator < 0 {
            Ok(Self::from_parts(whole, -numerator, -denominator))
        } else {
            Ok(Self::from_parts(whole, numerator, denominator))
        }
    }

    /// Creates a rational from a plain fraction (whole part zero).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn from_fraction(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(0, numerator, denominator)
    }

    /// Normalizes a triple whose denominator is already positive.
    ///
    /// Folds the improper total into the whole part with truncating
    /// division (so whole and numerator inherit the total's sign), then
    /// reduces by the gcd. `gcd(0, d) = d` collapses a zero fraction to
    /// `0/1`.
    fn from_parts(whole: i64, numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0);
        let total = whole * denominator + numerator;
        let remainder = total % denominator;
        let g = remainder.abs().gcd(&denominator);
        Self {
            whole: total / denominator,
            numerator: remainder / g,
            denominator: denominator / g,
        }
    }

    /// Collapses to an improper `(numerator, denominator)` pair with a
    /// positive denominator.
    fn as_ratio(self) -> (i64, i64) {
        (self.whole * self.denominator + self.numerator, self.denominator)
    }

    /// Returns the whole part.
    #[must_use]
    pub const fn whole(self) -> i64 {
        self.whole
    }

    /// Returns the numerator of the proper fraction part.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Adds an integer or rational operand.
    ///
    /// # Errors
    ///
    /// Addition of canonical values cannot currently fail; the checked
    /// signature is shared by the four arithmetic operations.
    pub fn add(self, rhs: impl Into<Operand>) -> Result<Self, RationalError> {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.into().as_ratio();
        Ok(Self::from_parts(0, an * bd + bn * ad, ad * bd))
    }

    /// Subtracts an integer or rational operand.
    ///
    /// # Errors
    ///
    /// Subtraction of canonical values cannot currently fail; the checked
    /// signature is shared by the four arithmetic operations.
    pub fn subtract(self, rhs: impl Into<Operand>) -> Result<Self, RationalError> {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.into().as_ratio();
        Ok(Self::from_parts(0, an * bd - bn * ad, ad * bd))
    }

    /// Multiplies by an integer or rational operand.
    ///
    /// # Errors
    ///
    /// Multiplication of canonical values cannot currently fail; the
    /// checked signature is shared by the four arithmetic operations.
    pub fn multiply(self, rhs: impl Into<Operand>) -> Result<Self, RationalError> {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.into().as_ratio();
        Ok(Self::from_parts(0, an * bn, ad * bd))
    }

    /// Divides by an integer or rational operand.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the operand's value
    /// is zero.
    pub fn divide(self, rhs: impl Into<Operand>) -> Result<Self, RationalError> {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.into().as_ratio();
        if bn == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Self::new(0, an * bd, ad * bn)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        // Taking magnitudes of a canonical triple yields a canonical triple.
        Self {
            whole: self.whole.abs(),
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the value is zero.
    pub fn recip(self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let (n, d) = self.as_ratio();
        Self::new(0, d, n)
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(self, exp: u32) -> Self {
        let (n, d) = self.as_ratio();
        Self::from_parts(0, n.pow(exp), d.pow(exp))
    }

    /// Converts to the nearest `f64`.
    ///
    /// Exact whenever the value is representable in binary floating
    /// point; otherwise subject to ordinary rounding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.whole as f64 + self.numerator as f64 / self.denominator as f64
    }

    /// Returns true if this rational is a whole number.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.numerator == 0
    }

    /// Converts to an integer if the fraction part is zero.
    #[must_use]
    pub fn to_integer(self) -> Option<i64> {
        self.is_integer().then_some(self.whole)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(self) -> i8 {
        let leading = if self.whole != 0 { self.whole } else { self.numerator };
        if leading > 0 {
            1
        } else if leading < 0 {
            -1
        } else {
            0
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.signum() < 0
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.whole == 0 && self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

// Operator impls cover the rational-to-rational case, where canonical
// denominators make addition, subtraction and multiplication total.
// Division stays on the checked `divide` method.
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.as_ratio();
        Self::from_parts(0, an * bd + bn * ad, ad * bd)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.as_ratio();
        Self::from_parts(0, an * bd - bn * ad, ad * bd)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (an, ad) = self.as_ratio();
        let (bn, bd) = rhs.as_ratio();
        Self::from_parts(0, an * bn, ad * bd)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            whole: -self.whole,
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self {
            whole: n,
            numerator: 0,
            denominator: 1,
        }
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Renders a non-negative value with the given digit glyph table.
fn glyph_digits(value: u64, table: &[char; 10]) -> String {
    value
        .to_string()
        .bytes()
        .map(|b| table[usize::from(b - b'0')])
        .collect()
}

impl fmt::Display for Rational {
    /// Canonical display form: `0`, a plain signed integer, a
    /// superscript/subscript fraction such as `¹⁰/₂₁`, or a mixed number
    /// such as `-4 ¹/₂` with the sign carried once on the whole part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator == 0 {
            return write!(f, "{}", self.whole);
        }
        if self.whole == 0 {
            if self.numerator < 0 {
                f.write_str("-")?;
            }
        } else {
            write!(f, "{} ", self.whole)?;
        }
        write!(
            f,
            "{}/{}",
            glyph_digits(self.numerator.unsigned_abs(), &SUPERSCRIPT_DIGITS),
            glyph_digits(self.denominator.unsigned_abs(), &SUBSCRIPT_DIGITS)
        )
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rational({}, {}, {})",
            self.whole, self.numerator, self.denominator
        )
    }
}
