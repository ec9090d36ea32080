//! # baz Text
//!
//! Byte-oriented text handling for puzzle inputs and outputs.
//!
//! - **[`Span`]** – borrowed byte view with slicing, trimming, number parsing and a
//!   [`Split`] cursor for lines and words
//! - **[`num`]** – digit conversion, formatting and prefix parsing in bases 2 to 36
//! - **[`FixedString<N>`]** – bounded output buffer, usable with `write!`
//!
//! ## Quick Example
//!
//! ```rust
//! use baz_text::{FixedString, Span};
//!
//! let input = Span::from("3 4\n4 3\n2 5\n");
//! let mut total = 0;
//! for line in input.lines() {
//!     let (a, rest) = line.parse_u64(10).unwrap();
//!     let (b, _) = rest.trim_start_whitespace().parse_u64(10).unwrap();
//!     total += a.abs_diff(b);
//! }
//!
//! let mut out: FixedString = FixedString::new();
//! out.push_u64(total, 10);
//! assert_eq!(out.as_bytes(), b"5");
//! ```

pub mod fixed_string;
pub mod num;
pub mod span;

pub use fixed_string::FixedString;
pub use span::{Split, Span};
