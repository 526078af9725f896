//! Error types for the formatting engine.
//!
//! Every variant is an invalid-call signal: the engine either fully succeeds
//! or fails before the caller can observe any output. The message texts are
//! part of the public contract and are asserted verbatim by the conformance
//! suite.

use thiserror::Error;

/// Error type for all formatting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The pattern was absent at the checked boundary.
    #[error("Message pattern cannot be null.")]
    NullPattern,

    /// The argument sequence was absent at the checked boundary.
    /// An empty sequence is valid and does not raise this.
    #[error("Array of arguments cannot be null.")]
    NullArguments,

    /// A placeholder had no matching argument. `required` is the 1-indexed
    /// minimum argument count the pattern has needed so far.
    #[error("{}", insufficient_message(.required, .supplied))]
    InsufficientArguments { required: usize, supplied: usize },

    /// The scan finished with arguments left over. `placeholders` is the
    /// number of placeholders that consumed an argument.
    #[error("{}", surplus_message(.placeholders, .supplied))]
    SurplusArguments { placeholders: usize, supplied: usize },
}

fn insufficient_message(required: &usize, supplied: &usize) -> String {
    if *required == 1 {
        return "Expected at least 1 argument, but none was given.".to_string();
    }
    if *supplied == 1 {
        format!("Expected at least {required} arguments, but only one was given.")
    } else {
        format!("Expected at least {required} arguments, but only {supplied} were given.")
    }
}

fn surplus_message(placeholders: &usize, supplied: &usize) -> String {
    let useless = supplied - placeholders;
    let mut message = format!("Expected {supplied} placeholder");
    if *supplied > 1 {
        message.push('s');
    }
    message.push_str(", while ");
    message.push_str(&placeholders.to_string());
    message.push_str(" argument");
    if *placeholders > 1 {
        message.push_str("s were");
    } else {
        message.push_str(" was");
    }
    message.push_str(" found: therefore, ");
    message.push_str(&useless.to_string());
    if useless > 1 {
        message.push_str(" arguments are useless.");
    } else {
        message.push_str(" argument is useless.");
    }
    message
}
