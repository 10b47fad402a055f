//! Serial runner for lash behaviour suites.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs an rspec suite on one thread, in declaration order.
///
/// Lifecycle suites share one lash behind an `Arc<Mutex<_>>` and each
/// `when` block's `before_all` continues from the state the previous block
/// left (extend, then retract, then extend again). Running blocks in
/// parallel would interleave those phases on the same lash.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    Runner::new(config, vec![logger]).run(suite);
}
