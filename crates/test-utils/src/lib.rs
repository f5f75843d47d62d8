pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a tracing subscriber for construplan's integration tests.
///
/// Output goes through the test writer, so the store's `info!` commits and
/// the resolver's cycle `warn!` only show up for failing tests or with
/// `-- --nocapture`. The filter comes from `RUST_LOG` (not `CONSTRUPLAN_LOG`,
/// which only the binary reads), e.g. `RUST_LOG=construplan=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Fail the test if `f` does not finish within 5 seconds.
/// Wrap every await on a store handle or watcher channel in this.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("store or watcher did not answer within 5 seconds")
}
