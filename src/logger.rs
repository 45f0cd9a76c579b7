//! Logging setup. Stdout carries the generated text, so records go to stderr
//! and, optionally, to `{dir}/initlist-gen.log`.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

pub const LOG_FILE_NAME: &str = "initlist-gen.log";

const CONSOLE_PATTERN: &str = "[{l}] {t} - {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";

/// error|warn|info|debug|trace; anything else is `Warn`.
#[must_use]
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("warn").to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Builds the log4rs config. With `dir` set, the log file is created there.
///
/// # Errors
/// Returns an error if the log file can't be opened or the config is rejected.
pub fn build_config(dir: Option<&Path>, level: LevelFilter) -> Result<Config, Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let mut builder = Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(dir.join(LOG_FILE_NAME))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }
    Ok(builder.build(root.build(level))?)
}

/// Installs the global logger. A logger that is already installed is kept.
///
/// # Errors
/// Returns an error if the config can't be built.
pub fn configure_logging(dir: Option<&Path>, level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(dir, parse_level(level))?;
    let _ = log4rs::init_config(config);
    Ok(())
}

/// Configure logging from `INITLIST_LOG_DIR` and `INITLIST_LOG_LEVEL`.
///
/// # Errors
/// See [`configure_logging`].
pub fn configure_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::var("INITLIST_LOG_DIR").ok().map(std::path::PathBuf::from);
    let level = std::env::var("INITLIST_LOG_LEVEL").ok();
    configure_logging(dir.as_deref(), level.as_deref())
}
