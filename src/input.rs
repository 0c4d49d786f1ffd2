//! Command-line input validation.
//!
//! The binary accepts exactly one decimal integer. Everything else is a
//! usage error and maps to exit code 2.

use thiserror::Error;

use crate::constants::EXIT_USAGE;

/// Errors for malformed command-line input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("you must pass exactly one integer argument")]
    MissingArgument,

    #[error("you must pass exactly one integer argument (got {0})")]
    TooManyArguments(usize),

    #[error("{0} is not an integer")]
    NotAnInteger(String),
}

impl InputError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_USAGE
    }
}

/// Require exactly one raw argument and return it.
pub fn single_argument(args: &[String]) -> Result<&str, InputError> {
    match args {
        [] => Err(InputError::MissingArgument),
        [one] => Ok(one.as_str()),
        many => Err(InputError::TooManyArguments(many.len())),
    }
}

/// Parse a signed decimal integer.
///
/// An optional `+` or `-` sign followed by ASCII digits. Whitespace,
/// digit separators and radix prefixes are rejected, as are values that
/// do not fit in an `i64`.
pub fn parse_number(raw: &str) -> Result<i64, InputError> {
    raw.parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(raw.to_string()))
}
