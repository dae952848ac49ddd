use std::env;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const VS_DEBUG: &str = "VS_DEBUG";

/// Installs the global fmt subscriber. `RUST_LOG` wins when set, otherwise
/// the level is `info`, or `debug` with `VS_DEBUG=true`.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_tracing() {
    let vs_debug = env::var(VS_DEBUG).unwrap_or_else(|_| "false".to_string());

    let default_level = if vs_debug.eq_ignore_ascii_case("true") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
