//! Positional `{}` placeholder formatting with strict argument counting.
//!
//! This crate provides a small text-templating engine as an alternative to
//! printf-style formatting: a single generic `{}` token instead of format
//! specifiers, plus defenses printf-style formatters lack — the placeholder
//! and argument counts must match exactly, placeholders can be escaped, and
//! arrays (including self-referential ones) render safely without infinite
//! recursion.
//!
//! # Example
//!
//! ```rust
//! use slotfmt::{args, format};
//!
//! let out = format("Hello {} world", &args!["fantastic"]).unwrap();
//! assert_eq!(out, "Hello fantastic world");
//!
//! let out = format("{}", &args![vec![123i32, 456]]).unwrap();
//! assert_eq!(out, "[123, 456]");
//! ```
//!
//! # Escaping
//!
//! A backslash immediately before the token suppresses substitution; a double
//! backslash cancels the escape, leaving one literal backslash:
//!
//! ```rust
//! use slotfmt::{args, format};
//!
//! assert_eq!(format(r"Hello \{} world", &args![]).unwrap(), "Hello {} world");
//! assert_eq!(format(r"C:\\{}", &args!["file.zip"]).unwrap(), r"C:\file.zip");
//! ```
//!
//! Backslashes anywhere else in the pattern are ordinary text.
//!
//! # Count enforcement
//!
//! Too few arguments fail at the first unmatched placeholder; leftover
//! arguments fail once the scan completes:
//!
//! ```rust
//! use slotfmt::{args, format};
//!
//! let err = format("{} and {}", &args!["only one"]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected at least 2 arguments, but only one was given."
//! );
//! ```

mod error;
mod render;
mod scanner;
mod value;

pub use error::FormatError;
pub use value::{RefArray, Value};

/// Formats `pattern`, replacing each unescaped `{}` with the rendered text of
/// the corresponding argument, and returns the realized string.
///
/// Equivalent to [`format_as_buffer`]; the split exists so callers can choose
/// between "give me the finished string" and "give me the buffer to keep
/// appending to".
pub fn format(pattern: &str, args: &[Value]) -> Result<String, FormatError> {
    format_as_buffer(pattern, args)
}

/// Formats `pattern` and returns the raw output buffer.
///
/// The returned `String` keeps its spare capacity, so a caller that wants to
/// append more text avoids an immediate reallocation. The engine retains no
/// reference to it.
pub fn format_as_buffer(pattern: &str, args: &[Value]) -> Result<String, FormatError> {
    scanner::scan(pattern, args)
}

/// Boundary adapter for callers holding optional inputs.
///
/// An absent pattern or an absent argument sequence fails before any scanning
/// begins; an empty argument slice is valid and distinct from an absent one.
pub fn format_checked(
    pattern: Option<&str>,
    args: Option<&[Value]>,
) -> Result<String, FormatError> {
    let pattern = pattern.ok_or(FormatError::NullPattern)?;
    let args = args.ok_or(FormatError::NullArguments)?;
    scanner::scan(pattern, args)
}

/// Builds a `Vec<Value>` from heterogeneous expressions via `Value: From`.
///
/// ```rust
/// use slotfmt::{args, format, Value};
///
/// let values = args![123i32, "text", vec![true, false], Value::Null];
/// assert_eq!(
///     format("{} {} {} {}", &values).unwrap(),
///     "123 text [true, false] null"
/// );
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
