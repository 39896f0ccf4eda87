//! Fast path for literals whose value is one correctly rounded operation away.
//!
//! When the significant digits fit the significand exactly and the power of
//! ten is itself exact, a single IEEE multiply or divide yields the correctly
//! rounded result.

use super::lexer::Literal;

/// Significant digits kept in a `u64` (10^19 < 2^64).
const MAX_MANTISSA_DIGITS: u32 = 19;

const F64_POWERS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

const F32_POWERS: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];

/// The leading significant digits of a literal as an integer times 10^exp10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mantissa {
    pub digits: u64,
    pub exp10: i64,
    /// A non-zero digit did not fit in `digits`.
    pub truncated: bool,
}

impl Mantissa {
    pub(crate) fn read(literal: &Literal<'_>) -> Self {
        let mut digits = 0u64;
        let mut taken = 0u32;
        let mut significant = 0i64;
        let mut truncated = false;

        let mut push = |d: u8| {
            if taken < MAX_MANTISSA_DIGITS {
                digits = digits * 10 + u64::from(d);
                taken += 1;
            } else if d != 0 {
                truncated = true;
            }
        };

        for &c in literal.integer {
            let d = c - b'0';
            if d == 0 && significant == 0 {
                continue;
            }
            significant += 1;
            push(d);
        }
        let mut point = significant;
        for &c in literal.fraction {
            let d = c - b'0';
            if d == 0 && significant == 0 {
                point -= 1;
                continue;
            }
            significant += 1;
            push(d);
        }

        Self {
            digits,
            exp10: point - i64::from(taken) + literal.exponent,
            truncated,
        }
    }

    /// Every digit was zero.
    pub(crate) fn is_zero(&self) -> bool {
        self.digits == 0 && !self.truncated
    }
}

/// Exact double precision conversion, if one exists. Sign is not applied.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) fn exact_f64(m: &Mantissa) -> Option<f64> {
    if m.truncated || m.digits >> 53 != 0 {
        return None;
    }
    let mut f = m.digits as f64;
    match m.exp10 {
        0 => Some(f),
        1..=37 => {
            let mut e = m.exp10;
            if e > 22 {
                f *= F64_POWERS[(e - 22) as usize];
                e = 22;
            }
            if f > 1e15 {
                return None;
            }
            Some(f * F64_POWERS[e as usize])
        }
        -22..=-1 => Some(f / F64_POWERS[(-m.exp10) as usize]),
        _ => None,
    }
}

/// Exact single precision conversion, if one exists. Sign is not applied.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) fn exact_f32(m: &Mantissa) -> Option<f32> {
    if m.truncated || m.digits >> 24 != 0 {
        return None;
    }
    let mut f = m.digits as f32;
    match m.exp10 {
        0 => Some(f),
        1..=17 => {
            let mut e = m.exp10;
            if e > 10 {
                f *= F32_POWERS[(e - 10) as usize];
                e = 10;
            }
            if f > 1e7 {
                return None;
            }
            Some(f * F32_POWERS[e as usize])
        }
        -10..=-1 => Some(f / F32_POWERS[(-m.exp10) as usize]),
        _ => None,
    }
}
