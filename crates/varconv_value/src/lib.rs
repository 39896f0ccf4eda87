//! Raw-text values with typed accessors for varconv.
//!
//! A [`Value`] stores exactly the text it was given and converts on demand.
//! Nothing is cached: every accessor re-parses, so the text stays the single
//! source of truth.
//!
//! ```
//! use varconv_value::Value;
//!
//! let v = Value::from("0x1F");
//! assert!(v.int().unwrap_err().is_syntax());
//! assert_eq!(v.int_with(varconv_value::ParseOptions::prefixed()).unwrap(), 31);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod value;

pub use value::Value;
pub use varconv_parse::{ParseOptions, Radix};
