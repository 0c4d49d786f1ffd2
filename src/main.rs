//! ordinal — print the English ordinal suffix for an integer.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! propagation; [`cli::report`] turns errors into exit codes.

mod cli;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, trace};

use cli::args::Cli;
use ordinals::Suffix;
use ordinals::constants::EXIT_SUCCESS;
use ordinals::env::Env;
use ordinals::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, &Env::real());

    let code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => cli::report(&err),
    };
    process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    debug!(args = ?cli.numbers, "parsing input");
    let n = cli.number()?;

    let suffix = Suffix::of(n);
    trace!(n, %suffix, "resolved suffix");

    let mut out = std::io::stdout().lock();
    let written = if cli.newline {
        writeln!(out, "{suffix}")
    } else {
        write!(out, "{suffix}")
    };
    written.context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
