#![cfg(test)]

//! Unified test logging initialization
//!
//! One-time guard so unit tests can call `init()` freely. The logging
//! level is taken from, in order:
//!
//! 1. `TEST_LOG` environment variable (preferred)
//! 2. `RUST_LOG` environment variable (fallback)
//! 3. `"warn"` (default, quiet)
//!
//! ```bash
//! TEST_LOG=debug cargo test -p sumtap
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo output capture
            .without_time() // Stable output
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}
