use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber.
///
/// `level` is the default directive; `RUST_LOG` refines or overrides it.
/// Everything goes to stderr so stdout carries only the report.
pub fn init_logging(level: impl Into<LevelFilter>) {
    let level: LevelFilter = level.into();
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
