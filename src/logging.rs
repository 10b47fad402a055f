//! Logger setup for the `lash-sim` harness and tests.

use env_logger::{Builder, Env};

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` takes precedence when set. Otherwise everything logs at info,
/// and `verbose` lowers the `lash` target alone to debug so segment growth
/// and collapse show up without noise from other crates.
pub fn init(verbose: bool) {
    let filter = if verbose { "info,lash=debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(filter));
    builder.format_timestamp_millis();

    // A logger may already be installed by an earlier test; keep it.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
