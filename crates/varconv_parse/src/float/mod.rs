//! Floating point literals.
//!
//! Conversion runs in three stages:
//! 1. [`lexer`] validates the literal's shape (syntax errors stop here)
//! 2. [`exact`] handles literals one IEEE operation away from their value
//! 3. [`decimal`] handles everything else with exact shift-and-round
//!
//! Rounding happens once, at the requested width: a `float32` conversion never
//! goes through `f64` first.

mod decimal;
mod exact;
mod lexer;

use tracing::trace;
use varconv_foundation::{FloatWidth, Rejection, Result, Scalar, Target, attach};

use crate::Outcome;
use decimal::{Decimal, F32_FORMAT, F64_FORMAT, FloatFormat};
use exact::Mantissa;
use lexer::{Literal, lex, split_sign};

/// Parses a decimal floating point literal, rounded to `width`.
///
/// Accepts `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at least
/// one mantissa digit, and the case-insensitive special values `inf`,
/// `infinity` and `nan` with an optional sign. With [`FloatWidth::F32`] the
/// result is the nearest `f32`, widened exactly.
///
/// # Errors
///
/// - Syntax error (fallback `0.0`) for malformed text.
/// - Range error (fallback infinity of the literal's sign) when the magnitude
///   exceeds the largest finite value of `width`. Values too small to
///   represent round to a signed zero without error.
#[track_caller]
pub fn parse_float(text: &str, width: FloatWidth) -> Result<f64> {
    match width {
        FloatWidth::F64 => attach(classify::<f64>(text), Target::Float(width), text),
        FloatWidth::F32 => attach(classify::<f32>(text), Target::Float(width), text).map(f64::from),
    }
}

/// Parses a decimal floating point literal as an `f32`.
///
/// Same grammar and classification as [`parse_float`] with
/// [`FloatWidth::F32`].
///
/// # Errors
///
/// See [`parse_float`].
#[track_caller]
pub fn parse_f32(text: &str) -> Result<f32> {
    attach(classify::<f32>(text), Target::Float(FloatWidth::F32), text)
}

/// A binary floating point type the converter can produce.
pub(crate) trait Binary: Copy + Into<Scalar> {
    const FORMAT: FloatFormat;
    const ZERO: Self;
    const INFINITY: Self;
    const NAN: Self;

    fn exact(mantissa: &Mantissa) -> Option<Self>;
    fn from_raw(bits: u64) -> Self;
    fn negate(self) -> Self;
}

impl Binary for f64 {
    const FORMAT: FloatFormat = F64_FORMAT;
    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;

    fn exact(mantissa: &Mantissa) -> Option<Self> {
        exact::exact_f64(mantissa)
    }

    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn negate(self) -> Self {
        -self
    }
}

impl Binary for f32 {
    const FORMAT: FloatFormat = F32_FORMAT;
    const ZERO: Self = 0.0;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;

    fn exact(mantissa: &Mantissa) -> Option<Self> {
        exact::exact_f32(mantissa)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    fn negate(self) -> Self {
        -self
    }
}

pub(crate) fn classify<F: Binary>(text: &str) -> Outcome<F> {
    let bytes = text.as_bytes();
    if let Some(value) = special::<F>(bytes) {
        return Ok(value);
    }
    match lex(bytes) {
        Some(literal) => convert(&literal),
        None => Err(Rejection::syntax(F::ZERO)),
    }
}

/// `inf`, `infinity` and `nan` in any case, with an optional sign.
fn special<F: Binary>(text: &[u8]) -> Option<F> {
    let (negative, word) = split_sign(text);
    if word.eq_ignore_ascii_case(b"inf") || word.eq_ignore_ascii_case(b"infinity") {
        Some(if negative {
            F::INFINITY.negate()
        } else {
            F::INFINITY
        })
    } else if word.eq_ignore_ascii_case(b"nan") {
        Some(F::NAN)
    } else {
        None
    }
}

fn convert<F: Binary>(literal: &Literal<'_>) -> Outcome<F> {
    let sign = |value: F| if literal.negative { value.negate() } else { value };

    let mantissa = Mantissa::read(literal);
    if mantissa.is_zero() {
        return Ok(sign(F::ZERO));
    }
    if let Some(value) = F::exact(&mantissa) {
        return Ok(sign(value));
    }

    trace!(
        digits = literal.integer.len() + literal.fraction.len(),
        exponent = literal.exponent,
        "inexact literal, using decimal conversion"
    );
    let (bits, overflow) = Decimal::from_literal(literal).to_bits(&F::FORMAT);
    let value = F::from_raw(bits);
    if overflow {
        Err(Rejection::range(value))
    } else {
        Ok(value)
    }
}
