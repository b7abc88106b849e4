use chrono::Utc;
use log::info;
use std::io::Write;

/// `env_logger` builder filtered by `level` alone. `RUST_LOG` is not consulted,
/// `LOG_LEVEL` is the only knob.
pub fn builder(level: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    builder
}

/// Install the global logger. A second call is a no-op.
pub fn init(level: &str) {
    if builder(level).try_init().is_ok() {
        info!("Logger initialized at level '{}'", level);
    }
}
