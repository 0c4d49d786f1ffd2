//! CLI argument parsing and the error reporting boundary.

pub mod args;

use colored::Colorize;

use ordinals::constants::EXIT_FAILURE;
use ordinals::input::InputError;

/// Exit status for an error that reached `main`.
///
/// Input errors are usage errors; anything else is a plain failure.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<InputError>()
        .map_or(EXIT_FAILURE, InputError::exit_code)
}

/// Print `err` to stderr and return the exit status to use.
pub fn report(err: &anyhow::Error) -> i32 {
    eprintln!("{} {err:#}", "error:".red().bold());
    exit_code(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use ordinals::constants::EXIT_USAGE;

    #[test]
    fn input_errors_exit_with_usage_code() {
        let err = anyhow::Error::new(InputError::MissingArgument);
        assert_eq!(exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn context_does_not_hide_input_errors() {
        let err = Err::<(), _>(InputError::NotAnInteger("x".into()))
            .context("reading argument")
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn other_errors_exit_with_failure() {
        let err = anyhow::anyhow!("stdout closed");
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }
}
