//! Debug CLI for the pyl lexer.
//!
//! The binary is a thin argument dispatcher; everything it runs lives in
//! [`commands`] so it can be driven from tests without spawning a process.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber used by the CLI.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Enable lexer diagnostics with `RUST_LOG=pyl_lexer=debug`, or
/// `RUST_LOG=pyl_lexer=trace` to also see every indentation transition.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
