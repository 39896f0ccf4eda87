//! Integration tests for signed integer literals

use varconv_foundation::ErrorKind::{self, Range, Syntax};
use varconv_foundation::Width;
use varconv_parse::{Radix, parse_int};

/// Expands each row into its own `#[test]`.
///
/// `name: input => want` expects success; `name: input => want, Kind` expects
/// an error of that kind carrying `want` as its fallback.
macro_rules! int_cases {
    (@kind) => { None };
    (@kind $kind:ident) => { Some($kind) };
    ($radix:expr, $width:expr;
     $($name:ident: $input:expr => $want:expr $(, $kind:ident)?;)*) => {
        $(
            #[test]
            fn $name() {
                check($input, $radix, $width, $want, int_cases!(@kind $($kind)?));
            }
        )*
    };
}

fn check(input: &str, radix: Radix, width: Width, want: i64, kind: Option<ErrorKind>) {
    match (parse_int(input, radix, width), kind) {
        (Ok(got), None) => assert_eq!(got, want),
        (Err(err), Some(kind)) => {
            assert_eq!(err.kind, kind);
            assert_eq!(err.value::<i64>(), Some(want));
            assert_eq!(err.input, input);
        }
        (got, _) => panic!("{input:?}: unexpected {got:?}"),
    }
}

// =============================================================================
// Decimal
// =============================================================================

mod decimal_64 {
    use super::*;

    int_cases! { Radix::Decimal, Width::W64;
        empty_is_syntax: "" => 0, Syntax;
        zero: "0" => 0;
        negative_zero: "-0" => 0;
        one: "1" => 1;
        minus_one: "-1" => -1;
        five_digits: "12345" => 12345;
        negative_five_digits: "-12345" => -12345;
        leading_zero_stays_decimal: "012345" => 12345;
        negative_leading_zero_stays_decimal: "-012345" => -12345;
        eleven_digits: "98765432100" => 98_765_432_100;
        negative_eleven_digits: "-98765432100" => -98_765_432_100;
        max_value: "9223372036854775807" => i64::MAX;
        negated_max_value: "-9223372036854775807" => -i64::MAX;
        one_past_max_saturates: "9223372036854775808" => i64::MAX, Range;
        min_value: "-9223372036854775808" => i64::MIN;
        two_past_max_saturates: "9223372036854775809" => i64::MAX, Range;
        one_below_min_saturates: "-9223372036854775809" => i64::MIN, Range;
        explicit_plus_sign: "+42" => 42;
        lone_minus_is_syntax: "-" => 0, Syntax;
        lone_plus_is_syntax: "+" => 0, Syntax;
        double_minus_is_syntax: "--1" => 0, Syntax;
        plus_minus_is_syntax: "+-1" => 0, Syntax;
        minus_plus_is_syntax: "-+1" => 0, Syntax;
        overflow_with_trailing_garbage_is_syntax: "99999999999999999999999x" => 0, Syntax;
    }
}

// =============================================================================
// Prefixed
// =============================================================================

mod prefixed_64 {
    use super::*;

    int_cases! { Radix::Prefixed, Width::W64;
        empty_is_syntax: "" => 0, Syntax;
        zero: "0" => 0;
        negative_zero: "-0" => 0;
        one: "1" => 1;
        minus_one: "-1" => -1;
        decimal_without_prefix: "12345" => 12345;
        negative_decimal_without_prefix: "-12345" => -12345;
        leading_zero_is_octal: "012345" => 0o12345;
        negative_leading_zero_is_octal: "-012345" => -0o12345;
        lower_hex_prefix: "0x12345" => 0x12345;
        negative_upper_hex_prefix: "-0X12345" => -0x12345;
        trailing_letter_is_syntax: "12345x" => 0, Syntax;
        negative_trailing_letter_is_syntax: "-12345x" => 0, Syntax;
        eleven_digits: "98765432100" => 98_765_432_100;
        negative_eleven_digits: "-98765432100" => -98_765_432_100;
        max_value: "9223372036854775807" => i64::MAX;
        negated_max_value: "-9223372036854775807" => -i64::MAX;
        one_past_max_saturates: "9223372036854775808" => i64::MAX, Range;
        min_value: "-9223372036854775808" => i64::MIN;
        two_past_max_saturates: "9223372036854775809" => i64::MAX, Range;
        one_below_min_saturates: "-9223372036854775809" => i64::MIN, Range;
        binary_prefix_is_syntax: "0b101" => 0, Syntax;
        explicit_octal_prefix_is_syntax: "0o17" => 0, Syntax;
        underscore_separator_is_syntax: "1_000" => 0, Syntax;
        underscore_after_hex_prefix_is_syntax: "0x_ff" => 0, Syntax;
    }
}

// =============================================================================
// Explicit bases
// =============================================================================

mod base_2 {
    use super::*;

    int_cases! { Radix::Base(2), Width::W64;
        zero: "0" => 0;
        minus_one: "-1" => -1;
        ten: "1010" => 10;
        two_to_the_15: "1000000000000000" => 1 << 15;
        max_value: "111111111111111111111111111111111111111111111111111111111111111"
            => i64::MAX;
        one_past_max_saturates: "1000000000000000000000000000000000000000000000000000000000000000"
            => i64::MAX, Range;
        min_value: "-1000000000000000000000000000000000000000000000000000000000000000"
            => i64::MIN;
        one_below_min_saturates: "-1000000000000000000000000000000000000000000000000000000000000001"
            => i64::MIN, Range;
        digit_two_is_syntax: "102" => 0, Syntax;
    }
}

mod base_8 {
    use super::*;

    int_cases! { Radix::Base(8), Width::W64;
        negative_ten: "-10" => -8;
        eleven_digits: "57635436545" => 0o57_635_436_545;
        two_to_the_24: "100000000" => 1 << 24;
    }
}

mod base_16 {
    use super::*;

    int_cases! { Radix::Base(16), Width::W64;
        ten_is_sixteen: "10" => 16;
        negative_mixed_digits: "-123456789abcdef" => -0x0123_4567_89ab_cdef;
        max_value: "7fffffffffffffff" => i64::MAX;
        prefix_is_not_stripped: "0x10" => 0, Syntax;
    }
}

mod base_17 {
    use super::*;

    int_cases! { Radix::Base(17), Width::W64;
        letter_g_is_sixteen: "g" => 16;
    }
}

mod base_25 {
    use super::*;

    int_cases! { Radix::Base(25), Width::W64;
        ten_is_twenty_five: "10" => 25;
    }
}

mod base_35 {
    use super::*;

    int_cases! { Radix::Base(35), Width::W64;
        holycow: "holycow"
            => (((((17 * 35 + 24) * 35 + 21) * 35 + 34) * 35 + 12) * 35 + 24) * 35 + 32;
    }
}

mod base_36 {
    use super::*;

    int_cases! { Radix::Base(36), Width::W64;
        holycow: "holycow"
            => (((((17 * 36 + 24) * 36 + 21) * 36 + 34) * 36 + 12) * 36 + 24) * 36 + 32;
        uppercase_digits: "HOLYCOW"
            => (((((17 * 36 + 24) * 36 + 21) * 36 + 34) * 36 + 12) * 36 + 24) * 36 + 32;
    }
}

mod base_0 {
    use super::*;

    int_cases! { Radix::Base(0), Width::W64;
        is_syntax: "10" => 0, Syntax;
    }
}

mod base_1 {
    use super::*;

    int_cases! { Radix::Base(1), Width::W64;
        is_syntax: "0" => 0, Syntax;
    }
}

mod base_37 {
    use super::*;

    int_cases! { Radix::Base(37), Width::W64;
        is_syntax: "10" => 0, Syntax;
    }
}

// =============================================================================
// Narrow widths
// =============================================================================

mod decimal_32 {
    use super::*;

    int_cases! { Radix::Decimal, Width::W32;
        empty_is_syntax: "" => 0, Syntax;
        zero: "0" => 0;
        negative_zero: "-0" => 0;
        one: "1" => 1;
        minus_one: "-1" => -1;
        five_digits: "12345" => 12345;
        negative_five_digits: "-12345" => -12345;
        leading_zero_stays_decimal: "012345" => 12345;
        negative_leading_zero_stays_decimal: "-012345" => -12345;
        trailing_letter_is_syntax: "12345x" => 0, Syntax;
        negative_trailing_letter_is_syntax: "-12345x" => 0, Syntax;
        nine_digits: "987654321" => 987_654_321;
        negative_nine_digits: "-987654321" => -987_654_321;
        max_value: "2147483647" => (1 << 31) - 1;
        negated_max_value: "-2147483647" => -((1 << 31) - 1);
        one_past_max_saturates: "2147483648" => (1 << 31) - 1, Range;
        min_value: "-2147483648" => -1 << 31;
        two_past_max_saturates: "2147483649" => (1 << 31) - 1, Range;
        one_below_min_saturates: "-2147483649" => -1 << 31, Range;
    }
}

mod decimal_16 {
    use super::*;

    int_cases! { Radix::Decimal, Width::W16;
        max_value: "32767" => 32767;
        min_value: "-32768" => -32768;
        one_below_min_saturates: "-32769" => i64::from(i16::MIN), Range;
    }
}

mod decimal_8 {
    use super::*;

    int_cases! { Radix::Decimal, Width::W8;
        max_value: "127" => 127;
        min_value: "-128" => -128;
        one_past_max_saturates: "128" => 127, Range;
    }
}
