//! Complex literals: a real and an imaginary float separated by whitespace.

use varconv_foundation::{Complex, ComplexWidth, ErrorKind, Rejection, Result, Target, attach};

use crate::Outcome;
use crate::float::{Binary, classify};

/// Parses `"<re> <im>"` into a complex number of the given width.
///
/// Each field follows the [`parse_float`](crate::parse_float) grammar and is
/// rounded at the component width (`f32` for [`ComplexWidth::C64`]).
///
/// # Errors
///
/// - Syntax error (fallback `0+0i`) unless there are exactly two fields and
///   both are valid float literals.
/// - Range error when a component overflows; the fallback keeps the other
///   component and puts a signed infinity in the overflowing one.
#[track_caller]
pub fn parse_complex(text: &str, width: ComplexWidth) -> Result<Complex<f64>> {
    match width {
        ComplexWidth::C128 => attach(classify_complex::<f64>(text), Target::Complex(width), text),
        ComplexWidth::C64 => {
            attach(classify_complex::<f32>(text), Target::Complex(width), text).map(Complex::from)
        }
    }
}

/// Parses `"<re> <im>"` with `f32` components.
///
/// # Errors
///
/// See [`parse_complex`].
#[track_caller]
pub fn parse_complex64(text: &str) -> Result<Complex<f32>> {
    attach(
        classify_complex::<f32>(text),
        Target::Complex(ComplexWidth::C64),
        text,
    )
}

fn classify_complex<F: Binary>(text: &str) -> Outcome<Complex<F>> {
    let zero = Complex::new(F::ZERO, F::ZERO);

    let mut fields = text.split_ascii_whitespace();
    let (Some(re), Some(im), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Rejection::syntax(zero));
    };

    match (classify::<F>(re), classify::<F>(im)) {
        (Ok(re), Ok(im)) => Ok(Complex::new(re, im)),
        (Err(r), _) | (_, Err(r)) if r.kind == ErrorKind::Syntax => Err(Rejection::syntax(zero)),
        (re, im) => {
            let re = re.unwrap_or_else(|r| r.saturated);
            let im = im.unwrap_or_else(|r| r.saturated);
            Err(Rejection::range(Complex::new(re, im)))
        }
    }
}
