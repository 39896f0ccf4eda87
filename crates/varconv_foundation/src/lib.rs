//! Error classification, stack capture, and scalar types for varconv.
//!
//! This crate provides:
//! - [`ErrorKind`] and [`ParseError`] - The two failure classes and the error carrying them
//! - [`Rejection`] and [`attach`] - Classified outcomes and how they become errors
//! - [`StackTrace`] - Call-site snapshots attached to every error
//! - [`Scalar`] - The tagged union of conversion results
//! - [`Width`], [`FloatWidth`], [`ComplexWidth`], [`Target`] - Type descriptors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scalar;
pub mod trace;
pub mod types;

pub use error::{ErrorKind, ParseError, Rejection, attach};
pub use scalar::{Complex, FromScalar, Scalar};
pub use trace::{StackFrame, StackTrace};
pub use types::{ComplexWidth, FloatWidth, Target, Width};

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, ParseError>;
