//! The single-pass pattern scanner and argument-count validation.
//!
//! The scanner walks the pattern left to right looking for `{}` tokens and
//! classifies each occurrence by the backslashes immediately before it:
//!
//! - unescaped — substitute the next argument
//! - `\{}` — emit a literal `{}`, consume nothing
//! - `\\{}` — keep one backslash as a literal and still substitute
//!
//! Backslashes anywhere else in the pattern are copied through untouched.
//! Both token search and escape classification are byte-based, which is safe
//! because `{`, `}` and `\` are ASCII and can never appear inside a longer
//! UTF-8 sequence.

use crate::error::FormatError;
use crate::render;
use crate::value::Value;

/// The fixed 2-character placeholder token.
const PLACEHOLDER: &str = "{}";

/// The escape character, effective only immediately before a token.
const ESCAPE: u8 = b'\\';

/// Per-argument headroom added to the output capacity hint.
const ARGUMENT_SIZE_HINT: usize = 7;

/// Runs the full scan: substitution, escape resolution and count checks.
///
/// On success the returned `String` still carries its unused capacity, so a
/// caller that wants to keep appending gets the raw buffer, not a trimmed
/// copy.
pub(crate) fn scan(pattern: &str, args: &[Value]) -> Result<String, FormatError> {
    let bytes = pattern.as_bytes();
    let mut out = String::with_capacity(pattern.len() + args.len() * ARGUMENT_SIZE_HINT);

    let mut cursor = 0;
    let mut consumed = 0;

    loop {
        let Some(offset) = pattern[cursor..].find(PLACEHOLDER) else {
            if cursor == 0 {
                // pattern was just a message; surplus arguments fail here too
                check_all_consumed(consumed, args.len())?;
            }
            break;
        };
        let hit = cursor + offset;

        if hit == 0 || bytes[hit - 1] != ESCAPE {
            out.push_str(&pattern[cursor..hit]);
            render::append(&mut out, take_argument(args, consumed)?);
            consumed += 1;
        } else if hit >= 2 && bytes[hit - 2] == ESCAPE {
            // double escape: one backslash survives, the token still substitutes
            out.push_str(&pattern[cursor..hit - 1]);
            render::append(&mut out, take_argument(args, consumed)?);
            consumed += 1;
        } else {
            // single escape: the token itself becomes literal output
            out.push_str(&pattern[cursor..hit - 1]);
            out.push_str(PLACEHOLDER);
        }
        cursor = hit + PLACEHOLDER.len();
    }

    check_all_consumed(consumed, args.len())?;
    out.push_str(&pattern[cursor..]);
    Ok(out)
}

/// Fails fast when a placeholder needs an argument the caller did not supply.
fn take_argument(args: &[Value], index: usize) -> Result<&Value, FormatError> {
    args.get(index).ok_or(FormatError::InsufficientArguments {
        required: index + 1,
        supplied: args.len(),
    })
}

/// Fails when the scan leaves supplied arguments unconsumed.
fn check_all_consumed(consumed: usize, supplied: usize) -> Result<(), FormatError> {
    if consumed < supplied {
        return Err(FormatError::SurplusArguments {
            placeholders: consumed,
            supplied,
        });
    }
    Ok(())
}
