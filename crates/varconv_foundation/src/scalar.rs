//! The result union produced by conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex number with real and imaginary parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<T> {
    /// The real part.
    pub re: T,
    /// The imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Constructs a complex number from its parts.
    #[must_use]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl From<Complex<f32>> for Complex<f64> {
    fn from(c: Complex<f32>) -> Self {
        Self::new(f64::from(c.re), f64::from(c.im))
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.re, self.im)
    }
}

/// A converted scalar, tagged with its type.
///
/// Successful conversions hand back plain Rust values; `Scalar` is what a
/// [`ParseError`](crate::ParseError) carries as its best-effort result and
/// what dynamic dispatch over a [`Target`](crate::Target) returns.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scalar {
    /// Boolean.
    Bool(bool),
    /// Signed integer (any width, sign-extended).
    Int(i64),
    /// Unsigned integer (any width, zero-extended).
    Uint(u64),
    /// Single precision float.
    Float32(f32),
    /// Double precision float.
    Float64(f64),
    /// Complex number with single precision parts.
    Complex64(Complex<f32>),
    /// Complex number with double precision parts.
    Complex128(Complex<f64>),
}

impl Scalar {
    /// Returns true if the value is the zero of its type (`false`, `0`, `0+0i`).
    ///
    /// Negative zero counts as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Bool(b) => !b,
            Self::Int(n) => n == 0,
            Self::Uint(n) => n == 0,
            Self::Float32(x) => x == 0.0,
            Self::Float64(x) => x == 0.0,
            Self::Complex64(c) => c.re == 0.0 && c.im == 0.0,
            Self::Complex128(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// Extracts the value as `T` if the variant converts losslessly.
    #[must_use]
    pub fn get<T: FromScalar>(self) -> Option<T> {
        T::from_scalar(self)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Float64(x) => write!(f, "{x}"),
            Self::Complex64(c) => write!(f, "{c}"),
            Self::Complex128(c) => write!(f, "{c}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<f32> for Scalar {
    fn from(x: f32) -> Self {
        Self::Float32(x)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float64(x)
    }
}

impl From<Complex<f32>> for Scalar {
    fn from(c: Complex<f32>) -> Self {
        Self::Complex64(c)
    }
}

impl From<Complex<f64>> for Scalar {
    fn from(c: Complex<f64>) -> Self {
        Self::Complex128(c)
    }
}

/// Rust types that can be pulled back out of a [`Scalar`].
pub trait FromScalar: Sized {
    /// Returns the value if `scalar` holds something representable as `Self`.
    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

impl FromScalar for bool {
    fn from_scalar(scalar: Scalar) -> Option<Self> {
        match scalar {
            Scalar::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! signed_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl FromScalar for $ty {
                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::Int(n) => <$ty>::try_from(n).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! unsigned_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl FromScalar for $ty {
                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::Uint(n) => <$ty>::try_from(n).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

signed_from_scalar!(i8, i16, i32, i64);
unsigned_from_scalar!(u8, u16, u32, u64);

impl FromScalar for f32 {
    fn from_scalar(scalar: Scalar) -> Option<Self> {
        match scalar {
            Scalar::Float32(x) => Some(x),
            _ => None,
        }
    }
}

impl FromScalar for f64 {
    fn from_scalar(scalar: Scalar) -> Option<Self> {
        match scalar {
            Scalar::Float32(x) => Some(f64::from(x)),
            Scalar::Float64(x) => Some(x),
            _ => None,
        }
    }
}

impl FromScalar for Complex<f32> {
    fn from_scalar(scalar: Scalar) -> Option<Self> {
        match scalar {
            Scalar::Complex64(c) => Some(c),
            _ => None,
        }
    }
}

impl FromScalar for Complex<f64> {
    fn from_scalar(scalar: Scalar) -> Option<Self> {
        match scalar {
            Scalar::Complex64(c) => Some(c.into()),
            Scalar::Complex128(c) => Some(c),
            _ => None,
        }
    }
}
