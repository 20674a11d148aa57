use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initializes console logging at the given level. Call once at startup.
pub fn init(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let stdout =
        ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(PATTERN))).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Console plus a log file, for long-lived sessions.
pub fn init_with_file(level: LevelFilter, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let stdout =
        ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(PATTERN))).build();
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("stdout").appender("file").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Initializes logging from a log4rs configuration file, for deployments
/// that ship one.
pub fn init_from_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log4rs::init_file(path, Default::default())?;
    Ok(())
}
