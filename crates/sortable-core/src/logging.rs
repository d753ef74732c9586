//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,sortable=debug,sortable_core=info";

/// Install a formatting subscriber honouring `RUST_LOG`.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a formatting subscriber, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid. Calling this twice is harmless.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
