//! The raw-text value and its typed accessors.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use tracing::trace;
use varconv_foundation::{Complex, ComplexWidth, FloatWidth, Result, Scalar, Target, Width};
use varconv_parse::{
    ParseOptions, Radix, parse, parse_bool, parse_complex, parse_complex64, parse_f32, parse_float,
    parse_int, parse_uint,
};

/// A variable's value, kept as the text it was assigned.
///
/// Values are immutable and cheap to clone. Equality and hashing look only at
/// the text; the width hint is advisory and never changes what a value *is*.
///
/// Every accessor is `#[track_caller]`, so an error's trace ends at the line
/// that asked for the conversion.
#[derive(Clone, Debug)]
pub struct Value {
    raw: Arc<str>,
    hint: Option<Width>,
}

macro_rules! signed_accessors {
    ($($name:ident => $ty:ty, $width:expr;)*) => {
        $(
            #[doc = concat!("Parses the text as a decimal `", stringify!($ty), "`.")]
            ///
            /// # Errors
            ///
            /// Syntax or range errors from [`parse_int`]; the fallback is
            /// already saturated to this width.
            #[track_caller]
            #[allow(clippy::cast_possible_truncation)]
            pub fn $name(&self) -> Result<$ty> {
                self.observe(parse_int(&self.raw, Radix::Decimal, $width))
                    .map(|n| n as $ty)
            }
        )*
    };
}

macro_rules! unsigned_accessors {
    ($($name:ident => $ty:ty, $width:expr;)*) => {
        $(
            #[doc = concat!("Parses the text as a decimal `", stringify!($ty), "`.")]
            ///
            /// # Errors
            ///
            /// Syntax or range errors from [`parse_uint`]; the fallback is
            /// already saturated to this width.
            #[track_caller]
            #[allow(clippy::cast_possible_truncation)]
            pub fn $name(&self) -> Result<$ty> {
                self.observe(parse_uint(&self.raw, Radix::Decimal, $width))
                    .map(|n| n as $ty)
            }
        )*
    };
}

impl Value {
    /// Creates a value from its text.
    #[must_use]
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self {
            raw: raw.into(),
            hint: None,
        }
    }

    /// Attaches a width hint used by [`int`](Self::int), [`uint`](Self::uint)
    /// and [`float`](Self::float).
    #[must_use]
    pub fn with_hint(mut self, width: Width) -> Self {
        self.hint = Some(width);
        self
    }

    /// The width hint, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Width> {
        self.hint
    }

    /// The raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Length of the raw text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the raw text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The whitespace-separated words of the text.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.raw.split_ascii_whitespace()
    }

    /// Parses the text as a boolean.
    ///
    /// # Errors
    ///
    /// Syntax error unless the text is one of the accepted spellings.
    #[track_caller]
    pub fn bool(&self) -> Result<bool> {
        self.observe(parse_bool(&self.raw))
    }

    /// Parses the text as a decimal signed integer at the hinted width
    /// (64 bits without a hint).
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_int`].
    #[track_caller]
    pub fn int(&self) -> Result<i64> {
        self.observe(parse_int(&self.raw, Radix::Decimal, self.hint.unwrap_or_default()))
    }

    /// Parses the text as a signed integer with explicit options.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_int`].
    #[track_caller]
    pub fn int_with(&self, options: ParseOptions) -> Result<i64> {
        self.observe(parse_int(&self.raw, options.radix, options.width_or(self.hint)))
    }

    signed_accessors! {
        int8 => i8, Width::W8;
        int16 => i16, Width::W16;
        int32 => i32, Width::W32;
    }

    /// Parses the text as a decimal `i64`, ignoring the hint.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_int`].
    #[track_caller]
    pub fn int64(&self) -> Result<i64> {
        self.observe(parse_int(&self.raw, Radix::Decimal, Width::W64))
    }

    /// Parses the text as a decimal unsigned integer at the hinted width
    /// (64 bits without a hint).
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_uint`].
    #[track_caller]
    pub fn uint(&self) -> Result<u64> {
        self.observe(parse_uint(&self.raw, Radix::Decimal, self.hint.unwrap_or_default()))
    }

    /// Parses the text as an unsigned integer with explicit options.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_uint`].
    #[track_caller]
    pub fn uint_with(&self, options: ParseOptions) -> Result<u64> {
        self.observe(parse_uint(&self.raw, options.radix, options.width_or(self.hint)))
    }

    unsigned_accessors! {
        uint8 => u8, Width::W8;
        uint16 => u16, Width::W16;
        uint32 => u32, Width::W32;
    }

    /// Parses the text as a decimal `u64`, ignoring the hint.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_uint`].
    #[track_caller]
    pub fn uint64(&self) -> Result<u64> {
        self.observe(parse_uint(&self.raw, Radix::Decimal, Width::W64))
    }

    /// Parses the text as a float, rounded to `f32` when the hint is 32 bits.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_float`].
    #[track_caller]
    pub fn float(&self) -> Result<f64> {
        let width = match self.hint {
            Some(Width::W32) => FloatWidth::F32,
            _ => FloatWidth::F64,
        };
        self.observe(parse_float(&self.raw, width))
    }

    /// Parses the text as an `f32`.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_f32`].
    #[track_caller]
    pub fn float32(&self) -> Result<f32> {
        self.observe(parse_f32(&self.raw))
    }

    /// Parses the text as an `f64`.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_float`].
    #[track_caller]
    pub fn float64(&self) -> Result<f64> {
        self.observe(parse_float(&self.raw, FloatWidth::F64))
    }

    /// Parses `"<re> <im>"` with `f32` components.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_complex64`].
    #[track_caller]
    pub fn complex64(&self) -> Result<Complex<f32>> {
        self.observe(parse_complex64(&self.raw))
    }

    /// Parses `"<re> <im>"` with `f64` components.
    ///
    /// # Errors
    ///
    /// Syntax or range errors from [`parse_complex`].
    #[track_caller]
    pub fn complex128(&self) -> Result<Complex<f64>> {
        self.observe(parse_complex(&self.raw, ComplexWidth::C128))
    }

    /// Parses the text as `target`.
    ///
    /// # Errors
    ///
    /// Whatever the parser for `target` reports.
    #[track_caller]
    pub fn parse(&self, target: Target) -> Result<Scalar> {
        self.observe(parse(&self.raw, target))
    }

    fn observe<T>(&self, result: Result<T>) -> Result<T> {
        result.inspect_err(|err| {
            trace!(
                raw = %self.raw,
                requested = %err.target,
                kind = %err.kind,
                "conversion failed"
            );
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::new(s)
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Value;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Value {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            // Only the text; the hint belongs to whoever declared the variable.
            serializer.serialize_str(&self.raw)
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            String::deserialize(deserializer).map(Value::from)
        }
    }
}
