//! Shape validation for decimal float literals.

/// Exponents are accumulated up to this magnitude and then saturate; anything
/// larger already over- or underflows every supported width.
const EXPONENT_LIMIT: i64 = 1_000_000;

/// A validated literal: `[+-]? integer ('.' fraction)? ([eE] [+-]? digits)?`.
///
/// `integer` and `fraction` contain ASCII digits only and are not both empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Literal<'a> {
    pub negative: bool,
    pub integer: &'a [u8],
    pub fraction: &'a [u8],
    pub exponent: i64,
}

/// Splits an optional leading sign.
pub(crate) fn split_sign(text: &[u8]) -> (bool, &[u8]) {
    match text {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    }
}

fn digit_run(text: &[u8]) -> (&[u8], &[u8]) {
    let len = text.iter().take_while(|c| c.is_ascii_digit()).count();
    text.split_at(len)
}

/// Validates `text` as a float literal. `None` means a syntax error.
pub(crate) fn lex(text: &[u8]) -> Option<Literal<'_>> {
    let (negative, rest) = split_sign(text);
    let (integer, mut rest) = digit_run(rest);

    let mut fraction: &[u8] = &[];
    if let [b'.', tail @ ..] = rest {
        (fraction, rest) = digit_run(tail);
    }
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = 0i64;
    if let [b'e' | b'E', tail @ ..] = rest {
        let (exponent_negative, digits) = split_sign(tail);
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        for &c in digits {
            if exponent < EXPONENT_LIMIT {
                exponent = exponent * 10 + i64::from(c - b'0');
            }
        }
        if exponent_negative {
            exponent = -exponent;
        }
        rest = &[];
    }

    if !rest.is_empty() {
        return None;
    }

    Some(Literal {
        negative,
        integer,
        fraction,
        exponent,
    })
}
