//! The argument value model.
//!
//! Arguments are modeled as a closed sum type instead of runtime type
//! inspection: the caller builds [`Value`]s at the call boundary (usually via
//! the [`args!`](crate::args) macro or the `From` conversions below) and the
//! renderer dispatches on the variant tag.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A reference array: elements of any [`Value`] kind, shared by handle.
///
/// The `Rc` is what gives the array an identity (two structurally equal
/// arrays are distinct keys for cycle detection), and the `RefCell` is what
/// lets a caller build a self-referential array in safe Rust:
///
/// ```rust
/// use slotfmt::{format, RefArray, Value};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let arr: RefArray = Rc::new(RefCell::new(vec![Value::from("a"), Value::Null]));
/// arr.borrow_mut()[1] = Value::Array(Rc::clone(&arr));
///
/// let out = format("{}", &[Value::Array(arr)]).unwrap();
/// assert_eq!(out, "[a, [...]]");
/// ```
pub type RefArray = Rc<RefCell<Vec<Value>>>;

/// One formatting argument.
///
/// The primitive-array variants mirror the element kinds that get a dedicated
/// rendering path (each element is printed with its shortest round-trip
/// `Display` form); everything else is either a scalar rendered through its
/// `Display` capability or a [`RefArray`] rendered recursively with cycle
/// detection.
#[derive(Clone)]
pub enum Value {
    /// The absent value; renders as the literal `null`.
    Null,
    /// Plain text, appended verbatim.
    Text(String),
    /// Any other scalar; rendering delegates to its `Display` impl.
    Scalar(Rc<dyn fmt::Display>),
    /// `[true, false]`
    Bools(Vec<bool>),
    /// Single-precision floats; `0.1f32` renders as `0.1`.
    Floats(Vec<f32>),
    /// Double-precision floats.
    Doubles(Vec<f64>),
    /// 16-bit integers.
    Shorts(Vec<i16>),
    /// 32-bit integers.
    Ints(Vec<i32>),
    /// 64-bit integers.
    Longs(Vec<i64>),
    /// 8-bit bytes (signed, matching the dedicated byte-array kind).
    Bytes(Vec<i8>),
    /// Characters; `['a', 'b']` renders as `[a, b]`.
    Chars(Vec<char>),
    /// Array of arbitrary values, including nested and self-referential ones.
    Array(RefArray),
}

impl Value {
    /// Wraps an arbitrary `Display` value as a scalar argument.
    pub fn scalar(value: impl fmt::Display + 'static) -> Self {
        Value::Scalar(Rc::new(value))
    }

    /// Builds a reference array from the given elements.
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<RefArray> for Value {
    fn from(array: RefArray) -> Self {
        Value::Array(array)
    }
}

macro_rules! scalar_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Rc::new(value))
                }
            }
        )+
    };
}

scalar_from!(bool, char, i8, i16, i32, i64, f32, f64);

macro_rules! array_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(items: Vec<$ty>) -> Self {
                    Value::$variant(items)
                }
            }

            impl From<&[$ty]> for Value {
                fn from(items: &[$ty]) -> Self {
                    Value::$variant(items.to_vec())
                }
            }
        )+
    };
}

array_from!(
    bool => Bools,
    f32 => Floats,
    f64 => Doubles,
    i16 => Shorts,
    i32 => Ints,
    i64 => Longs,
    i8 => Bytes,
    char => Chars,
);

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::array(items.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::array(items.into_iter().map(Value::Text).collect())
    }
}
