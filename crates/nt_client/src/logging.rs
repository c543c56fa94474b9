use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Install the global `fmt` subscriber once. Output goes to stderr so that
/// rendered articles on stdout stay clean.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
