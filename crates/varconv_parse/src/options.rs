//! Configuration for integer conversions.

use varconv_foundation::Width;

/// How the digits of an integer literal are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// Plain decimal digits. Leading zeros are insignificant.
    #[default]
    Decimal,
    /// Base chosen by prefix: `0x`/`0X` hex, a leading `0` octal, else decimal.
    Prefixed,
    /// A fixed base in `2..=36`, digits `0-9` then `a-z` (either case).
    ///
    /// Any other base rejects every input with a syntax error.
    Base(u32),
}

impl Radix {
    /// Smallest supported fixed base.
    pub const MIN_BASE: u32 = 2;
    /// Largest supported fixed base.
    pub const MAX_BASE: u32 = 36;
}

/// Options for integer conversions.
///
/// Mirrors the builder style used for other configuration structs: start
/// from a preset and adjust with `with_*` methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ParseOptions {
    /// How digits are interpreted.
    pub radix: Radix,
    /// Target width. `None` defers to the value's hint, then 64 bits.
    pub width: Option<Width>,
}

impl ParseOptions {
    /// Decimal digits, width from the value.
    #[must_use]
    pub fn decimal() -> Self {
        Self::default()
    }

    /// Base detected from a `0x` or `0` prefix.
    #[must_use]
    pub fn prefixed() -> Self {
        Self {
            radix: Radix::Prefixed,
            ..Self::default()
        }
    }

    /// A fixed base.
    #[must_use]
    pub fn base(base: u32) -> Self {
        Self {
            radix: Radix::Base(base),
            ..Self::default()
        }
    }

    /// Builder method to set the radix.
    #[must_use]
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    /// Builder method to set the width.
    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    /// The width to use, falling back to `hint` and then 64 bits.
    #[must_use]
    pub fn width_or(&self, hint: Option<Width>) -> Width {
        self.width.or(hint).unwrap_or_default()
    }
}
