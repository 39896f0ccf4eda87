//! Integration tests for Layer 1: Parse
//!
//! Table-driven tests for every literal parser, covering base detection,
//! saturation, signed zeros, subnormals, and halfway rounding.

mod bools;
mod complex;
mod ints;
