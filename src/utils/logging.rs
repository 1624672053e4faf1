// Thu Oct 15 2026 - Alex

use log::LevelFilter;

/// Installs an `env_logger` without timestamps. A second call is ignored.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .ok();
}

pub fn level_from_str(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from_str("warning"), LevelFilter::Warn);
        assert_eq!(level_from_str("off"), LevelFilter::Off);
        assert_eq!(level_from_str("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice() {
        init_logger(LevelFilter::Warn);
        init_logger(LevelFilter::Debug);
    }
}
