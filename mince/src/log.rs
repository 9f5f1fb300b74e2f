/**
 * file: log.rs
 * desc: Application logging.
 */
use tracing::Level;
use tracing_subscriber;

/**
 * Sets up tracing and logging at the given level. All logging goes to stderr.
 */
pub fn setup_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
}
