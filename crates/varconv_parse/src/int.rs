//! Signed and unsigned integer literals.

use varconv_foundation::{ErrorKind, Rejection, Result, Target, Width, attach};

use crate::Outcome;
use crate::options::Radix;

/// Parses an unsigned integer literal.
///
/// No sign is accepted. The whole text is validated before its magnitude is
/// considered, so malformed input is always a syntax error.
///
/// # Errors
///
/// - Syntax error (fallback `0`) for empty input, a sign, a digit outside the
///   base, or an unsupported base.
/// - Range error (fallback `2^width - 1`) when the value does not fit.
#[track_caller]
pub fn parse_uint(text: &str, radix: Radix, width: Width) -> Result<u64> {
    attach(classify_uint(text, radix, width), Target::Uint(width), text)
}

/// Parses a signed integer literal with an optional `+` or `-`.
///
/// # Errors
///
/// - Syntax error (fallback `0`) for a lone sign or malformed digits.
/// - Range error with fallback `2^(width-1) - 1` above the range, or
///   `-2^(width-1)` below it.
#[track_caller]
pub fn parse_int(text: &str, radix: Radix, width: Width) -> Result<i64> {
    attach(classify_int(text, radix, width), Target::Int(width), text)
}

pub(crate) fn classify_uint(text: &str, radix: Radix, width: Width) -> Outcome<u64> {
    let (base, digits) = split_radix(text.as_bytes(), radix).ok_or(Rejection::syntax(0))?;
    accumulate(digits, base, width.max_unsigned())
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) fn classify_int(text: &str, radix: Radix, width: Width) -> Outcome<i64> {
    let (negative, magnitude) = match text.as_bytes() {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    };
    let (base, digits) = split_radix(magnitude, radix).ok_or(Rejection::syntax(0))?;
    let n = match accumulate(digits, base, u64::MAX) {
        Ok(n) => n,
        Err(rejection) if rejection.kind == ErrorKind::Syntax => {
            return Err(Rejection::syntax(0));
        }
        Err(_) => u64::MAX,
    };

    let limit = width.max_signed().unsigned_abs();
    if negative {
        if n > limit + 1 {
            return Err(Rejection::range(width.min_signed()));
        }
        Ok(0i64.wrapping_sub_unsigned(n))
    } else {
        if n > limit {
            return Err(Rejection::range(width.max_signed()));
        }
        Ok(n as i64)
    }
}

/// Resolves the base and strips any prefix. `None` means an unusable base.
fn split_radix(text: &[u8], radix: Radix) -> Option<(u32, &[u8])> {
    match radix {
        Radix::Decimal => Some((10, text)),
        Radix::Base(base) if (Radix::MIN_BASE..=Radix::MAX_BASE).contains(&base) => {
            Some((base, text))
        }
        Radix::Base(_) => None,
        Radix::Prefixed => match text {
            [b'0', b'x' | b'X', rest @ ..] => Some((16, rest)),
            // The leading zero is itself a valid octal digit.
            [b'0', ..] => Some((8, text)),
            _ => Some((10, text)),
        },
    }
}

fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'z' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'Z' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Folds `digits` in `base`, saturating at `max`.
fn accumulate(digits: &[u8], base: u32, max: u64) -> Outcome<u64> {
    if digits.is_empty() {
        return Err(Rejection::syntax(0));
    }

    let mut n: u64 = 0;
    let mut overflow = false;
    for &c in digits {
        let d = match digit_value(c) {
            Some(d) if d < base => u64::from(d),
            _ => return Err(Rejection::syntax(0)),
        };
        if overflow {
            // keep scanning: a bad digit later still makes this a syntax error
            continue;
        }
        match n.checked_mul(u64::from(base)).and_then(|n| n.checked_add(d)) {
            Some(next) if next <= max => n = next,
            _ => overflow = true,
        }
    }

    if overflow {
        Err(Rejection::range(max))
    } else {
        Ok(n)
    }
}
