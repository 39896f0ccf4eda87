//! Scalar literal parsing for varconv.
//!
//! Every parser is a pure function from text to a typed value, reporting
//! failures as a [`ParseError`] that carries a best-effort fallback.
//!
//! # Architecture
//!
//! ```text
//! "-1.5e3"
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ CLASSIFY        │  → Ok(value) | Rejection { Syntax | Range, saturated }
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ ATTACH          │  → ParseError { kind, target, input, fallback, trace }
//! └─────────────────┘
//! ```
//!
//! Parsers classify first and bind the input afterwards, so the hot path never
//! allocates. Entry points are `#[track_caller]`: an error's trace ends at the
//! code that asked for the conversion, not inside this crate.
//!
//! # Modules
//!
//! - [`boolean`] - `true`/`false` spellings
//! - [`int`] - Signed and unsigned integers in any base
//! - [`float`] - Correctly rounded decimal floats
//! - [`complex`] - Pairs of floats
//! - [`options`] - Radix and width configuration
//!
//! [`ParseError`]: varconv_foundation::ParseError

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boolean;
pub mod complex;
pub mod float;
pub mod int;
pub mod options;

pub use boolean::parse_bool;
pub use complex::{parse_complex, parse_complex64};
pub use float::{parse_f32, parse_float};
pub use int::{parse_int, parse_uint};
pub use options::{ParseOptions, Radix};

use varconv_foundation::{ComplexWidth, FloatWidth, Rejection, Result, Scalar, Target};

/// A classified conversion that has not been bound to its input yet.
pub(crate) type Outcome<T> = std::result::Result<T, Rejection<T>>;

/// Parses `text` as `target`, returning the tagged result.
///
/// Integers are read as decimal. Use [`parse_int`] or [`parse_uint`] directly
/// for other bases.
///
/// # Errors
///
/// Whatever the parser for `target` reports.
#[track_caller]
pub fn parse(text: &str, target: Target) -> Result<Scalar> {
    let scalar = match target {
        Target::Bool => parse_bool(text)?.into(),
        Target::Int(width) => parse_int(text, Radix::Decimal, width)?.into(),
        Target::Uint(width) => parse_uint(text, Radix::Decimal, width)?.into(),
        Target::Float(FloatWidth::F32) => parse_f32(text)?.into(),
        Target::Float(FloatWidth::F64) => parse_float(text, FloatWidth::F64)?.into(),
        Target::Complex(ComplexWidth::C64) => parse_complex64(text)?.into(),
        Target::Complex(ComplexWidth::C128) => parse_complex(text, ComplexWidth::C128)?.into(),
    };
    Ok(scalar)
}
