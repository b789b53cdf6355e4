//! Foundations front-end driver.
//!
//! Reads a source file, normalizes line endings, runs the lexer and the
//! expression parser, and renders tokens, trees, and diagnostics.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fnd_parse=trace`,
/// `RUST_LOG=fnd_lexer=debug`, and so on.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
