//! Varconv - Typed conversion of raw-text variables
//!
//! This crate re-exports all layers of the varconv system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: varconv_value       - Value: raw text plus typed accessors
//! Layer 1: varconv_parse       - Literal parsers (bool, int, uint, float, complex)
//! Layer 0: varconv_foundation  - ErrorKind, ParseError, StackTrace, Scalar, widths
//! ```

pub use varconv_foundation as foundation;
pub use varconv_parse as parse;
pub use varconv_value as value;
