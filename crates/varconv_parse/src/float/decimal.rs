//! Correctly rounded decimal to binary conversion by repeated shifting.
//!
//! The literal is held as a bounded decimal digit string and repeatedly
//! multiplied or divided by powers of two until it lies in `[1, 2)`, then the
//! significand is read off with round-half-even. Digits beyond
//! [`MAX_DIGITS`] are dropped but remembered in a sticky `truncated` flag so a
//! value just above an exact tie still rounds up.

use super::lexer::Literal;

/// Significant decimal digits retained.
const MAX_DIGITS: usize = 800;

/// Largest single binary shift; keeps the running remainder below
/// `10 * 2^60`, which fits a `u64`.
const MAX_SHIFT: u32 = 60;

/// For a value with `n` integer digits, the largest `k` with `2^k < 10^n`.
const SHIFT_FOR_DIGITS: [i32; 9] = [1, 3, 6, 9, 13, 16, 19, 23, 26];

/// Layout of an IEEE 754 binary format.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FloatFormat {
    pub mantissa_bits: u32,
    pub exponent_bits: u32,
    pub bias: i32,
}

pub(crate) const F32_FORMAT: FloatFormat = FloatFormat {
    mantissa_bits: 23,
    exponent_bits: 8,
    bias: -127,
};

pub(crate) const F64_FORMAT: FloatFormat = FloatFormat {
    mantissa_bits: 52,
    exponent_bits: 11,
    bias: -1023,
};

impl FloatFormat {
    /// The all-ones biased exponent used by infinities.
    const fn max_biased_exponent(&self) -> i32 {
        (1 << self.exponent_bits) - 1
    }
}

enum Normalized {
    Finite { mantissa: u64, exponent: i32 },
    Overflow,
}

/// A decimal number `0.d1 d2 d3 ... * 10^point`.
pub(crate) struct Decimal {
    /// Digit values 0-9, most significant first, no trailing zeros.
    digits: [u8; MAX_DIGITS],
    len: usize,
    point: i32,
    negative: bool,
    /// Some non-zero digit was discarded.
    truncated: bool,
}

impl Decimal {
    pub(crate) fn from_literal(literal: &Literal<'_>) -> Self {
        let mut decimal = Self {
            digits: [0; MAX_DIGITS],
            len: 0,
            point: 0,
            negative: literal.negative,
            truncated: false,
        };

        let mut point: i64 = 0;
        for &c in literal.integer {
            let d = c - b'0';
            if d == 0 && decimal.len == 0 {
                continue;
            }
            point += 1;
            decimal.push(d);
        }
        for &c in literal.fraction {
            let d = c - b'0';
            if d == 0 && decimal.len == 0 {
                point -= 1;
                continue;
            }
            decimal.push(d);
        }

        let point = (point + literal.exponent).clamp(-100_000_000, 100_000_000);
        decimal.point = i32::try_from(point).unwrap_or_default();
        decimal.trim();
        decimal
    }

    fn push(&mut self, d: u8) {
        if self.len < MAX_DIGITS {
            self.digits[self.len] = d;
            self.len += 1;
        } else if d != 0 {
            self.truncated = true;
        }
    }

    fn trim(&mut self) {
        while self.len > 0 && self.digits[self.len - 1] == 0 {
            self.len -= 1;
        }
        if self.len == 0 {
            self.point = 0;
        }
    }

    /// Multiplies by `2^k` (or divides by `2^-k`).
    fn shift(&mut self, k: i32) {
        if self.len == 0 {
            return;
        }
        let mut amount = k.unsigned_abs();
        while amount > MAX_SHIFT {
            if k > 0 {
                self.left_shift(MAX_SHIFT);
            } else {
                self.right_shift(MAX_SHIFT);
            }
            amount -= MAX_SHIFT;
        }
        if k > 0 {
            self.left_shift(amount);
        } else if k < 0 {
            self.right_shift(amount);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn right_shift(&mut self, k: u32) {
        let mut read = 0usize;
        let mut write = 0usize;
        let mut n: u64 = 0;

        // Gather enough leading digits for the first output digit.
        while n >> k == 0 {
            if read >= self.len {
                if n == 0 {
                    self.len = 0;
                    self.point = 0;
                    return;
                }
                while n >> k == 0 {
                    n *= 10;
                    read += 1;
                }
                break;
            }
            n = n * 10 + u64::from(self.digits[read]);
            read += 1;
        }
        self.point -= read as i32 - 1;

        let mask = (1u64 << k) - 1;
        while read < self.len {
            let c = u64::from(self.digits[read]);
            self.digits[write] = (n >> k) as u8;
            n &= mask;
            n = n * 10 + c;
            read += 1;
            write += 1;
        }

        while n > 0 {
            let d = (n >> k) as u8;
            n &= mask;
            if write < MAX_DIGITS {
                self.digits[write] = d;
                write += 1;
            } else if d > 0 {
                self.truncated = true;
            }
            n *= 10;
        }

        self.len = write;
        self.trim();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn left_shift(&mut self, k: u32) {
        // Least significant digit first; 2^60 adds at most 19 digits.
        let mut out = [0u8; MAX_DIGITS + 20];
        let mut count = 0usize;
        let mut n: u64 = 0;

        for read in (0..self.len).rev() {
            n += u64::from(self.digits[read]) << k;
            let quotient = n / 10;
            out[count] = (n - 10 * quotient) as u8;
            count += 1;
            n = quotient;
        }
        while n > 0 {
            let quotient = n / 10;
            out[count] = (n - 10 * quotient) as u8;
            count += 1;
            n = quotient;
        }

        self.point += (count - self.len) as i32;
        let keep = count.min(MAX_DIGITS);
        if out[..count - keep].iter().any(|&d| d != 0) {
            self.truncated = true;
        }
        for i in 0..keep {
            self.digits[i] = out[count - 1 - i];
        }
        self.len = keep;
        self.trim();
    }

    /// Whether truncating to `nd` digits must round up (half to even).
    fn should_round_up(&self, nd: usize) -> bool {
        if nd >= self.len {
            return false;
        }
        if self.digits[nd] == 5 && nd + 1 == self.len {
            // Exactly half, unless something non-zero was discarded.
            if self.truncated {
                return true;
            }
            return nd > 0 && self.digits[nd - 1] % 2 == 1;
        }
        self.digits[nd] >= 5
    }

    /// The integer part, rounded half to even.
    fn rounded_integer(&self) -> u64 {
        if self.point > 20 {
            return u64::MAX;
        }
        // Below 0.1 there is nothing to round up to.
        let Ok(point) = usize::try_from(self.point) else {
            return 0;
        };
        let mut n: u64 = 0;
        for i in 0..point {
            let d = if i < self.len { self.digits[i] } else { 0 };
            n = n.wrapping_mul(10).wrapping_add(u64::from(d));
        }
        if self.should_round_up(point) {
            n += 1;
        }
        n
    }

    #[allow(clippy::cast_possible_wrap)]
    fn normalize(&mut self, format: &FloatFormat) -> Normalized {
        let zero = Normalized::Finite {
            mantissa: 0,
            exponent: format.bias,
        };
        if self.len == 0 {
            return zero;
        }
        // Far outside every supported range; skip the shifting.
        if self.point > 310 {
            return Normalized::Overflow;
        }
        if self.point < -330 {
            return zero;
        }

        let mut exponent = 0i32;
        while self.point > 0 {
            let n = usize::try_from(self.point)
                .ok()
                .and_then(|p| SHIFT_FOR_DIGITS.get(p))
                .copied()
                .unwrap_or(27);
            self.shift(-n);
            exponent += n;
        }
        while self.point < 0 || (self.point == 0 && self.digits[0] < 5) {
            let n = usize::try_from(-self.point)
                .ok()
                .and_then(|p| SHIFT_FOR_DIGITS.get(p))
                .copied()
                .unwrap_or(27);
            self.shift(n);
            exponent -= n;
        }

        // Now in [0.5, 1); move to [1, 2).
        exponent -= 1;

        // Below the smallest normal: denormalize.
        if exponent < format.bias + 1 {
            let n = format.bias + 1 - exponent;
            self.shift(-n);
            exponent += n;
        }
        if exponent - format.bias >= format.max_biased_exponent() {
            return Normalized::Overflow;
        }

        self.shift(1 + format.mantissa_bits as i32);
        let mut mantissa = self.rounded_integer();

        // Rounding carried into a new bit.
        if mantissa == 2 << format.mantissa_bits {
            mantissa >>= 1;
            exponent += 1;
            if exponent - format.bias >= format.max_biased_exponent() {
                return Normalized::Overflow;
            }
        }
        // No implicit leading bit: subnormal.
        if mantissa & (1 << format.mantissa_bits) == 0 {
            exponent = format.bias;
        }

        Normalized::Finite { mantissa, exponent }
    }

    /// Rounds to `format`, returning the raw bits and whether it overflowed.
    ///
    /// On overflow the bits encode an infinity of the literal's sign.
    pub(crate) fn to_bits(mut self, format: &FloatFormat) -> (u64, bool) {
        let (mantissa, exponent, overflow) = match self.normalize(format) {
            Normalized::Finite { mantissa, exponent } => (mantissa, exponent, false),
            Normalized::Overflow => (0, format.max_biased_exponent() + format.bias, true),
        };

        let exponent_mask = (1u64 << format.exponent_bits) - 1;
        let biased = u64::try_from(exponent - format.bias).unwrap_or(0);
        let mut bits = mantissa & ((1u64 << format.mantissa_bits) - 1);
        bits |= (biased & exponent_mask) << format.mantissa_bits;
        if self.negative {
            bits |= 1u64 << (format.mantissa_bits + format.exponent_bits);
        }
        (bits, overflow)
    }
}
