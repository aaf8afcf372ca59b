//! Subscriber installation for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Install a subscriber if `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=widl_parse=debug` for syntax errors as they are
/// emitted, or `RUST_LOG=widl_parse=trace` for every consumed token.
/// `tree` selects the indented hierarchical layout.
pub fn init_tracing(tree: bool) {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let filter = EnvFilter::from_default_env();
    let registry = tracing_subscriber::registry().with(filter);
    if tree {
        registry
            .with(HierarchicalLayer::new(2).with_targets(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    }
}
