//! Integration tests for complex literals

use varconv_foundation::ErrorKind::{self, Range, Syntax};
use varconv_foundation::{Complex, ComplexWidth, Target};
use varconv_parse::{parse_complex, parse_complex64};

/// Expands each row into its own `#[test]`.
///
/// `name: input => (re, im)` expects success with bit-identical parts;
/// `name: input => Kind` expects an error of that kind with a zero fallback.
macro_rules! complex_cases {
    (@row $check:ident, $reject:ident, $input:expr, ($re:expr, $im:expr)) => {
        $check($input, $re, $im)
    };
    (@row $check:ident, $reject:ident, $input:expr, $kind:ident) => {
        $reject($input, $kind)
    };
    ($check:ident, $reject:ident;
     $($name:ident: $input:expr => $want:tt;)*) => {
        $(
            #[test]
            fn $name() {
                complex_cases!(@row $check, $reject, $input, $want);
            }
        )*
    };
}

fn check_c64(input: &str, re: f32, im: f32) {
    let got = parse_complex64(input).unwrap();
    assert_eq!(got.re.to_bits(), re.to_bits(), "real part {}", got.re);
    assert_eq!(got.im.to_bits(), im.to_bits(), "imaginary part {}", got.im);
}

fn reject_c64(input: &str, kind: ErrorKind) {
    let err = parse_complex64(input).unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!(err.target, Target::Complex(ComplexWidth::C64));
    assert_eq!(err.value::<Complex<f32>>(), Some(Complex::new(0.0, 0.0)));
}

fn check_c128(input: &str, re: f64, im: f64) {
    let got = parse_complex(input, ComplexWidth::C128).unwrap();
    assert_eq!(got.re.to_bits(), re.to_bits(), "real part {}", got.re);
    assert_eq!(got.im.to_bits(), im.to_bits(), "imaginary part {}", got.im);
}

fn reject_c128(input: &str, kind: ErrorKind) {
    let err = parse_complex(input, ComplexWidth::C128).unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!(err.target, Target::Complex(ComplexWidth::C128));
    assert_eq!(err.value::<Complex<f64>>(), Some(Complex::new(0.0, 0.0)));
}

// =============================================================================
// complex64
// =============================================================================

mod complex64 {
    use super::*;

    complex_cases! { check_c64, reject_c64;
        halfway_and_below_halfway_round_down:
            "1.000000059604644775390625 1.000000059604644775390624" => (1.0, 1.0);
        single_field_is_syntax: "1" => Syntax;
        above_halfway_rounds_up: "1.000000059604644775390626 2" => (1.000_000_1, 2.0);
        malformed_real_part_is_syntax: "1x -0" => Syntax;
        malformed_imaginary_part_is_syntax: "-0 1x" => Syntax;
    }

    #[test]
    fn widens_exactly() {
        let wide = parse_complex("1.000000059604644775390626 2", ComplexWidth::C64).unwrap();
        assert_eq!(wide, Complex::new(f64::from(1.000_000_1f32), 2.0));
    }
}

// =============================================================================
// complex128
// =============================================================================

mod complex128 {
    use super::*;

    complex_cases! { check_c128, reject_c128;
        leading_space_single_field_is_syntax: " 1" => Syntax;
        signed_parts: "+1 -1" => (1.0, -1.0);
        malformed_real_part_is_syntax: "1x -0" => Syntax;
        malformed_imaginary_part_is_syntax: "-0 1x" => Syntax;
        second_point_in_real_part_is_syntax: "1.1. 0" => Syntax;
        lower_and_upper_case_exponents: "1e23 1E23" => (1e23, 1e23);
        long_integer_and_tiny_power: "100000000000000000000000 1e-100" => (1e23, 1e-100);
        trailing_zeros_and_tiny_power: "123456700 1e-100" => (1.234_567e8, 1e-100);
        integers_around_power_of_ten:
            "99999999999999974834176 100000000000000000000001"
            => (9.999_999_999_999_997e22, 1.000_000_000_000_000_1e23);
        integers_around_halfway:
            "100000000000000008388608 100000000000000016777215"
            => (1.000_000_000_000_000_1e23, 1.000_000_000_000_000_1e23);
        small_power_and_fraction: "1e-20 625e-3" => (1e-20, 0.625);
        three_fields_is_syntax: "1 2 3" => Syntax;
        empty_is_syntax: "" => Syntax;
    }
}

// =============================================================================
// Range handling
// =============================================================================

#[test]
fn overflowing_real_part_is_range() {
    let err = parse_complex("-1e400 0.5", ComplexWidth::C128).unwrap_err();
    assert_eq!(err.kind, Range);
    assert_eq!(
        err.value::<Complex<f64>>(),
        Some(Complex::new(f64::NEG_INFINITY, 0.5))
    );
}

#[test]
fn both_parts_overflowing() {
    let err = parse_complex64("1e39 -1e39").unwrap_err();
    assert_eq!(err.kind, Range);
    assert_eq!(
        err.value::<Complex<f32>>(),
        Some(Complex::new(f32::INFINITY, f32::NEG_INFINITY))
    );
}

#[test]
fn syntax_outranks_range() {
    let err = parse_complex("1e400 1x", ComplexWidth::C128).unwrap_err();
    assert_eq!(err.kind, Syntax);
    assert!(err.fallback.is_zero());
}

#[test]
fn special_values_in_components() {
    let c = parse_complex("-inf NaN", ComplexWidth::C128).unwrap();
    assert_eq!(c.re, f64::NEG_INFINITY);
    assert!(c.im.is_nan());
}
