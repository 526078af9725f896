//! Argument-to-text rendering.
//!
//! Scalars delegate to their `Display` capability; arrays render as
//! `[a, b, c]`. Reference arrays recurse with an active-frame set keyed by
//! the array's `Rc` identity, so a self-referential array collapses to
//! `[...]` instead of recursing forever, while the same array appearing twice
//! as a sibling still renders fully both times.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::value::{RefArray, Value};

/// Identity of one array currently being expanded on the recursion path.
type FrameKey = *const RefCell<Vec<Value>>;

/// Appends the textual form of one top-level argument.
///
/// Never fails: the absent value and cyclic arrays are handled cases. The
/// frame set lives only for this one argument's descent.
pub(crate) fn append(out: &mut String, value: &Value) {
    let mut active: Vec<FrameKey> = Vec::new();
    append_value(out, value, &mut active);
}

fn append_value(out: &mut String, value: &Value, active: &mut Vec<FrameKey>) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Text(text) => out.push_str(text),
        Value::Scalar(scalar) => out.push_str(&scalar.to_string()),
        Value::Bools(items) => append_elements(out, items),
        Value::Floats(items) => append_elements(out, items),
        Value::Doubles(items) => append_elements(out, items),
        Value::Shorts(items) => append_elements(out, items),
        Value::Ints(items) => append_elements(out, items),
        Value::Longs(items) => append_elements(out, items),
        Value::Bytes(items) => append_elements(out, items),
        Value::Chars(items) => append_elements(out, items),
        Value::Array(array) => append_ref_array(out, array, active),
    }
}

fn append_elements<T: Display>(out: &mut String, items: &[T]) {
    out.push('[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
}

fn append_ref_array(out: &mut String, array: &RefArray, active: &mut Vec<FrameKey>) {
    let key: FrameKey = Rc::as_ptr(array);
    out.push('[');
    if active.contains(&key) {
        // already an ancestor on this path
        out.push_str("...");
    } else {
        active.push(key);
        let elements = array.borrow();
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            append_value(out, element, active);
        }
        active.pop();
    }
    out.push(']');
}
