use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` directives, when present, are
/// layered on top of `level`. Records emitted through the `log` facade (actix
/// access logs among them) are forwarded to the same subscriber.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        tracing::info!("Logging initialized at level: {}", level);
    }
}
