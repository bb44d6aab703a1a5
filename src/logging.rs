use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Targets this package logs under: the library and the `impulse` binary.
const TARGETS: [&str; 2] = ["impulse_rs", "impulse"];

/// Default filter directives when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initializes console logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between info and
/// debug for this package. Stdout stays free for view output. Colors are
/// only written when stderr is a terminal.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    // Keep any subscriber installed earlier.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
