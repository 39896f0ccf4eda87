//! Error classification for conversions.
//!
//! Uses `thiserror` for the public error type. Converters first produce a
//! [`Rejection`], which only knows *why* the text was refused and what the
//! best-effort value is; [`attach`] then binds it to the input, the requested
//! [`Target`] and a [`StackTrace`].

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scalar::{FromScalar, Scalar};
use crate::trace::StackTrace;
use crate::types::Target;

/// Why a conversion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// The text is not a well-formed literal for the requested type.
    #[error("invalid syntax")]
    Syntax,
    /// The literal is well-formed but its magnitude does not fit.
    #[error("value out of range")]
    Range,
}

/// A classified failure that has not been bound to its input yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rejection<T> {
    /// The failure class.
    pub kind: ErrorKind,
    /// Zero for syntax errors, the saturated boundary for range errors.
    pub saturated: T,
}

impl<T> Rejection<T> {
    /// A syntax failure; `zero` is the zero value of the target type.
    #[must_use]
    pub const fn syntax(zero: T) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            saturated: zero,
        }
    }

    /// A range failure carrying the saturated boundary value.
    #[must_use]
    pub const fn range(boundary: T) -> Self {
        Self {
            kind: ErrorKind::Range,
            saturated: boundary,
        }
    }
}

/// A conversion failure.
///
/// Always carries a best-effort value in [`fallback`](Self::fallback) so the
/// caller can continue with a default.
#[derive(Clone, Debug, Error)]
#[error("parsing {input:?} as {target}: {kind}")]
pub struct ParseError {
    /// The failure class.
    pub kind: ErrorKind,
    /// The type that was requested.
    pub target: Target,
    /// The rejected text.
    pub input: String,
    /// Zero on syntax errors, the saturated boundary on range errors.
    pub fallback: Scalar,
    trace: StackTrace,
}

impl ParseError {
    /// Creates an error, capturing the call site of the caller.
    #[must_use]
    #[track_caller]
    pub fn new(
        kind: ErrorKind,
        target: Target,
        input: impl Into<String>,
        fallback: Scalar,
    ) -> Self {
        Self {
            kind,
            target,
            input: input.into(),
            fallback,
            trace: StackTrace::capture(),
        }
    }

    /// Returns true for syntax errors.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    /// Returns true for range errors.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.kind == ErrorKind::Range
    }

    /// The best-effort value as `T`, if the fallback converts into it.
    #[must_use]
    pub fn value<T: FromScalar>(&self) -> Option<T> {
        T::from_scalar(self.fallback)
    }

    /// Where the error was raised, oldest frame first.
    #[must_use]
    pub fn trace(&self) -> &StackTrace {
        &self.trace
    }
}

/// Binds a classified outcome to its input and target.
///
/// The stack trace starts at the caller, which is why every public conversion
/// is `#[track_caller]` as well.
///
/// # Errors
///
/// Returns a [`ParseError`] built from the rejection when `outcome` is `Err`.
#[track_caller]
pub fn attach<T>(
    outcome: Result<T, Rejection<T>>,
    target: Target,
    input: &str,
) -> crate::Result<T>
where
    T: Into<Scalar>,
{
    match outcome {
        Ok(value) => Ok(value),
        Err(rejection) => Err(ParseError::new(
            rejection.kind,
            target,
            input,
            rejection.saturated.into(),
        )),
    }
}
