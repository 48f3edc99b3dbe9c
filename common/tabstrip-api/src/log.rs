//! Logger initialization, shared by the tabstrip binaries.
//!
//! Output always goes to stderr.  If a log file is provided, records are also written there.
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::{fs::File, path::Path, str::FromStr};

/// Parses a `--log` value.  No value means info.
pub fn parse_level(level: Option<&str>) -> anyhow::Result<LevelFilter> {
    match level {
        Some(level) => LevelFilter::from_str(level)
            .map_err(|_| anyhow::format_err!("unsupported log level: {}", level)),
        None => Ok(LevelFilter::Info),
    }
}

pub fn init(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_str("%H:%M:%S%.3f")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(level, config, File::create(path)?));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn default_info() {
        assert_eq!(LevelFilter::Info, parse_level(None).unwrap());
    }

    #[test]
    fn named_levels() {
        assert_eq!(LevelFilter::Trace, parse_level(Some("trace")).unwrap());
        assert_eq!(LevelFilter::Off, parse_level(Some("off")).unwrap());
        assert_eq!(LevelFilter::Warn, parse_level(Some("WARN")).unwrap());
    }

    #[test]
    fn unknown_level() {
        assert!(parse_level(Some("loud")).is_err());
    }
}
