//! Boolean literals.

use varconv_foundation::{Rejection, Result, Target, attach};

use crate::Outcome;

/// Parses a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; every other
/// spelling (including other capitalisations) is a syntax error.
///
/// # Errors
///
/// Returns a syntax error with fallback `false` for anything else.
#[track_caller]
pub fn parse_bool(text: &str) -> Result<bool> {
    attach(classify_bool(text), Target::Bool, text)
}

fn classify_bool(text: &str) -> Outcome<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Rejection::syntax(false)),
    }
}
