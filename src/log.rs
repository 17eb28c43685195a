// src/log.rs
use tracing::Level;

/// Install the stderr subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
