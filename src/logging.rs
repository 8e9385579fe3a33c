//! Logger setup.
//!
//! Uses `log4rs.yml` from the working directory when it exists, otherwise a
//! stderr console appender. Either way the configured level is the ceiling
//! for what gets logged.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Build the fallback logger configuration.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    Ok(config)
}

/// Initialize the global logger.
///
/// `log4rs.yml` picks appenders and per-target levels; `level` still caps the
/// result, so `SUBNET_LOG_LEVEL` works with or without the file.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::set_max_level(level);
        log::debug!("Logging configured from {LOG_CONFIG_FILE} at level {level}");
    } else {
        log4rs::init_config(console_config(level)?)?;
        log::debug!("Logging to stderr at level {level}");
    }
    Ok(())
}
