use log::{LevelFilter, Metadata, Record};

/// The environment variable holding the maximum log level.
pub const LOG_ENV: &str = "RING_LIST_LOG";

struct Logger;

/// Parse a level name as accepted in [`LOG_ENV`].
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// Install the stderr logger, with the level taken from [`LOG_ENV`]
/// (`warn` if unset or unknown).
pub fn logger_init() -> Result<(), log::SetLoggerError> {
    static LOGGER: Logger = Logger;
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|name| parse_level(&name))
        .unwrap_or(LevelFilter::Warn);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn parse_levels() {
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_level(" Debug\n"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("OFF"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
