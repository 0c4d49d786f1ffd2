//! Diagnostic logging setup.
//!
//! Log events go to stderr so stdout carries nothing but the suffix.
//! Filter priority: `ORDINAL_LOG` > `-v` count > default (`warn`).

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Pick the filter directive for the given verbosity.
pub fn filter_directive(verbose: u8, env: &Env) -> String {
    if let Some(directive) = env.non_empty(ENV_LOG) {
        return directive;
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
    .to_string()
}

/// Install the global subscriber.
///
/// A directive `EnvFilter` cannot parse falls back to `warn` rather than
/// aborting the run. Calling this twice is a no-op.
pub fn init(verbose: u8, env: &Env) {
    let directive = filter_directive(verbose, env);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(filter_directive(0, &empty()), "warn");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(filter_directive(1, &empty()), "debug");
        assert_eq!(filter_directive(2, &empty()), "trace");
        assert_eq!(filter_directive(9, &empty()), "trace");
    }

    #[test]
    fn env_var_wins_over_verbosity() {
        let env = Env::mock([(ENV_LOG, "ordinals=info")]);
        assert_eq!(filter_directive(2, &env), "ordinals=info");
    }

    #[test]
    fn blank_env_var_is_ignored() {
        let env = Env::mock([(ENV_LOG, "")]);
        assert_eq!(filter_directive(1, &env), "debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, &empty());
        init(2, &Env::mock([(ENV_LOG, "not a [valid filter")]));
    }
}
