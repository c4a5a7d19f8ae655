use log::LevelFilter;
use std::path::Path;

// Dual-stream logging: full detail in an append-only file, terse progress on
// the console.
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

/// Initialize logging for one run.
///
/// Every record down to debug level is appended to
/// `<log_dir>/photo-organizer.log`; the console only shows records at
/// `console_level` and above. Call once, from the binary, before any work
/// starts.
pub fn init_logger(
    log_dir: &Path,
    console_level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;
    let log_file_path = log_dir.join("photo-organizer.log");

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l:<5.5}]  {m}{n}",
        )))
        .build(&log_file_path)
        .map_err(|e| format!("Failed to create log appender: {e}"))?;

    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("console", Box::new(console)),
        )
        .build(
            Root::builder()
                .appender("file")
                .appender("console")
                .build(LevelFilter::Debug),
        )
        .map_err(|e| format!("Failed to build log config: {e}"))?;

    log4rs::init_config(config).map_err(|e| format!("Failed to initialize log4rs: {e}"))?;

    log::debug!("Logging to file: {}", log_file_path.display());
    Ok(())
}
