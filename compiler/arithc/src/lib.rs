//! Arith driver library.
//!
//! Ties the phases together for a whole program:
//!
//! ```text
//! source text → lines → lex → parse → run (evaluate each line) → result
//! ```
//!
//! [`Session`] is the entry point for embedding: it owns the interner and
//! the environment, so bindings survive across calls. The `arith` binary
//! is a thin command layer over it.

mod config;
mod session;

pub use config::{ConfigError, Input, NumericMode, RunConfig};
pub use session::{RunError, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=arith_eval=trace` to follow the evaluator node by node.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
