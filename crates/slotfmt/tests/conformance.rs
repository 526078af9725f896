//! End-to-end conformance suite for the formatting contract.
//!
//! Every scenario checks both entry points and asserts they produce the same
//! text, since `format` is defined in terms of `format_as_buffer`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotfmt::{args, format, format_as_buffer, format_checked, FormatError, RefArray, Value};

fn assert_both(pattern: &str, args: &[Value], expected: &str) {
    let realized = format(pattern, args).unwrap();
    let buffer = format_as_buffer(pattern, args).unwrap();
    assert_eq!(realized, expected);
    assert_eq!(realized, buffer);
}

fn assert_both_fail(pattern: &str, args: &[Value], expected_message: &str) {
    let err1 = format(pattern, args).unwrap_err();
    let err2 = format_as_buffer(pattern, args).unwrap_err();
    assert_eq!(err1.to_string(), expected_message);
    assert_eq!(err1, err2);
}

// A scalar that only offers a Display capability, like any argument with a
// custom textual form.
struct Named(&'static str);

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

mod preconditions {
    use super::*;

    #[test]
    fn null_pattern() {
        let values = args!["Daniele Trunfio"];
        let err = format_checked(None, Some(&values)).unwrap_err();
        assert_eq!(err, FormatError::NullPattern);
        assert_eq!(err.to_string(), "Message pattern cannot be null.");
    }

    #[test]
    fn null_array_of_args() {
        let err = format_checked(Some("Pattern"), None).unwrap_err();
        assert_eq!(err, FormatError::NullArguments);
        assert_eq!(err.to_string(), "Array of arguments cannot be null.");
    }

    #[test]
    fn null_pattern_wins_over_null_args() {
        // both absent: the pattern check runs first
        let err = format_checked(None, None).unwrap_err();
        assert_eq!(err, FormatError::NullPattern);
    }
}

mod happy_cases {
    use super::*;

    #[test]
    fn no_args_and_no_placeholders() {
        assert_both("Hello, welcome to this test", &[], "Hello, welcome to this test");
    }

    #[test]
    fn with_args() {
        assert_both(
            "Hello {}, welcome to this {} test",
            &args!["Daniele Trunfio", "nice"],
            "Hello Daniele Trunfio, welcome to this nice test",
        );
    }

    #[test]
    fn with_null_arg() {
        assert_both("{}", &args![Value::Null], "null");
    }

    #[test]
    fn with_display_scalar() {
        assert_both("{}!", &[Value::scalar(Named("Ciao"))], "Ciao!");
    }

    #[test]
    fn with_numeric_scalars() {
        assert_both("{} and {}", &args![123i32, 0.1f32], "123 and 0.1");
    }

    #[test]
    fn with_self_referential_array() {
        let arr: RefArray = Rc::new(RefCell::new(vec![
            Value::scalar(Named("Io")),
            Value::scalar(Named("sono")),
            Value::scalar(Named("vendetta")),
            Value::Null,
        ]));
        arr.borrow_mut()[3] = Value::Array(Rc::clone(&arr));

        assert_both(
            "{} {}",
            &[Value::from("Ciao!"), Value::Array(arr)],
            "Ciao! [Io, sono, vendetta, [...]]",
        );
    }

    #[test]
    fn with_string_array() {
        assert_both("{}", &args![vec!["Ciao", "mamma!"]], "[Ciao, mamma!]");
    }

    #[test]
    fn with_char_array() {
        assert_both("{}", &args![vec!['a', 'b', 'c']], "[a, b, c]");
    }

    #[test]
    fn with_boolean_array() {
        assert_both("{}", &args![vec![true, false]], "[true, false]");
    }

    #[test]
    fn with_byte_array() {
        assert_both("{}", &args![vec![1i8, 2]], "[1, 2]");
    }

    #[test]
    fn with_short_array() {
        assert_both("{}", &args![vec![1i16, 2]], "[1, 2]");
    }

    #[test]
    fn with_int_array() {
        assert_both("{}", &args![vec![123i32, 456]], "[123, 456]");
    }

    #[test]
    fn with_long_array() {
        assert_both("{}", &args![vec![123i64, 456]], "[123, 456]");
    }

    #[test]
    fn with_float_array() {
        assert_both("{}", &args![vec![0.1f32, 0.2]], "[0.1, 0.2]");
    }

    #[test]
    fn with_double_array() {
        assert_both("{}", &args![vec![10.1f64, 100.2]], "[10.1, 100.2]");
    }

    #[test]
    fn repeated_sibling_array_renders_twice() {
        let shared: RefArray = Rc::new(RefCell::new(vec![Value::from("x"), Value::from("y")]));
        assert_both(
            "{} {}",
            &[
                Value::Array(Rc::clone(&shared)),
                Value::Array(Rc::clone(&shared)),
            ],
            "[x, y] [x, y]",
        );
    }
}

mod placeholder_escaping {
    use super::*;

    #[test]
    fn single_escape() {
        assert_both(
            r"Hello \{}, welcome to this {} test",
            &args!["nice"],
            "Hello {}, welcome to this nice test",
        );
    }

    #[test]
    fn double_escape() {
        assert_both(
            r"The file is available at path  C:\\{} but can be also found at http:\\\{}",
            &args!["mytest.zip", "www.onlineresources.com/mytest.zip"],
            "The file is available at path  C:\\mytest.zip but can be also found at http:\\\\www.onlineresources.com/mytest.zip",
        );
    }
}

mod count_mismatches {
    use super::*;

    #[test]
    fn one_placeholder_one_surplus_arg() {
        assert_both_fail(
            "{} prova, sa sa",
            &args![123i32, "ignored1"],
            "Expected 2 placeholders, while 1 argument was found: therefore, 1 argument is useless.",
        );
    }

    #[test]
    fn one_placeholder_many_surplus_args() {
        assert_both_fail(
            "{} prova, sa sa",
            &[
                Value::from(123i32),
                Value::from("ignored1"),
                Value::scalar(Named("2019-07-12")),
            ],
            "Expected 3 placeholders, while 1 argument was found: therefore, 2 arguments are useless.",
        );
    }

    #[test]
    fn two_placeholders_one_surplus_arg() {
        assert_both_fail(
            "Hello {}, welcome to this {} test",
            &args!["Daniele Trunfio", "nice", "ignored1"],
            "Expected 3 placeholders, while 2 arguments were found: therefore, 1 argument is useless.",
        );
    }

    #[test]
    fn two_placeholders_many_surplus_args() {
        assert_both_fail(
            "Hello {}, welcome to this {} test",
            &[
                Value::from("Daniele Trunfio"),
                Value::from("nice"),
                Value::from("ignored1"),
                Value::scalar(Named("2019-07-12")),
            ],
            "Expected 4 placeholders, while 2 arguments were found: therefore, 2 arguments are useless.",
        );
    }

    #[test]
    fn placeholders_with_no_args() {
        assert_both_fail(
            "Hello {}, welcome to this {} test",
            &[],
            "Expected at least 1 argument, but none was given.",
        );
    }

    #[test]
    fn two_placeholders_with_one_arg() {
        assert_both_fail(
            "Hello {}, welcome to this {} test",
            &args!["Johnny Dorelly"],
            "Expected at least 2 arguments, but only one was given.",
        );
    }

    #[test]
    fn three_placeholders_with_two_args() {
        assert_both_fail(
            "Hello {}, welcome to this {} test: time is {}.",
            &args!["Johnny Dorelly", "nice"],
            "Expected at least 3 arguments, but only 2 were given.",
        );
    }
}
