//! Width and target descriptors for conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit width of an integer conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    #[default]
    W64,
}

impl Width {
    /// Returns the number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Largest unsigned value, `2^bits - 1`.
    #[must_use]
    pub const fn max_unsigned(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }

    /// Largest signed value, `2^(bits-1) - 1`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn max_signed(self) -> i64 {
        (self.max_unsigned() >> 1) as i64
    }

    /// Smallest signed value, `-2^(bits-1)`.
    #[must_use]
    pub const fn min_signed(self) -> i64 {
        -self.max_signed() - 1
    }

    /// Maps a bit count onto a width.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

/// Precision of a floating point conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatWidth {
    /// IEEE 754 binary32.
    F32,
    /// IEEE 754 binary64.
    #[default]
    F64,
}

impl FloatWidth {
    /// Returns the number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::F32 => 32,
            Self::F64 => 64,
        }
    }
}

/// Precision of a complex conversion (total bits of both components).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComplexWidth {
    /// Two binary32 components.
    C64,
    /// Two binary64 components.
    #[default]
    C128,
}

impl ComplexWidth {
    /// Precision used for each component.
    #[must_use]
    pub const fn component(self) -> FloatWidth {
        match self {
            Self::C64 => FloatWidth::F32,
            Self::C128 => FloatWidth::F64,
        }
    }
}

/// The type a conversion was asked to produce.
///
/// Carried by every [`ParseError`](crate::ParseError) so messages name the
/// requested type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
    /// Boolean.
    Bool,
    /// Signed integer of the given width.
    Int(Width),
    /// Unsigned integer of the given width.
    Uint(Width),
    /// Floating point of the given precision.
    Float(FloatWidth),
    /// Complex number of the given precision.
    Complex(ComplexWidth),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int(w) => write!(f, "int{}", w.bits()),
            Self::Uint(w) => write!(f, "uint{}", w.bits()),
            Self::Float(w) => write!(f, "float{}", w.bits()),
            Self::Complex(ComplexWidth::C64) => write!(f, "complex64"),
            Self::Complex(ComplexWidth::C128) => write!(f, "complex128"),
        }
    }
}
