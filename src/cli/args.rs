//! Clap argument types.

use clap::{ArgAction, Parser};

use ordinals::input::{self, InputError};

/// Print the English ordinal suffix (st, nd, rd, th) for an integer.
#[derive(Parser, Debug)]
#[command(
    name = ordinals::constants::APP_NAME,
    version = ordinals::constants::VERSION,
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Append a trailing newline to the suffix.
    #[arg(short = 'n', long, default_value_t = false)]
    pub newline: bool,

    /// The integer to resolve. Negative values are allowed.
    #[arg(value_name = "INTEGER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

impl Cli {
    /// Validate that exactly one integer was given and parse it.
    pub fn number(&self) -> Result<i64, InputError> {
        let raw = input::single_argument(&self.numbers)?;
        input::parse_number(raw)
    }
}
