//! Tracing subscriber setup for the `kmt` binary.
//!
//! Off by default. Set `KMT_LOG` to an `EnvFilter` directive string to see
//! the pipeline's spans as an indented tree on stderr:
//!
//! ```text
//! KMT_LOG=debug kmt run prog.kmt
//! KMT_LOG=kmt_eval=trace kmt run prog.kmt
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "KMT_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `KMT_LOG` is set. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV) else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        // Another subscriber may already be installed (e.g. by an embedder).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .try_init();
    });
}
