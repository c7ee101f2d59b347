use std::io::Error;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error_utils::error;

pub const LOG_FILE_PATH : &str = "skirmish.log";
const LOG_PATTERN : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {M} - {m}{n}";

// stdout carries the battle narrative, so logs go to a file
pub fn init_logging(level: LevelFilter) -> Result<(), Error> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(LOG_FILE_PATH)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| error(format!("Invalid logging config: {}", e)))?;

    log4rs::init_config(config).map_err(|e| error(format!("Failed to set logger: {}", e)))?;
    Ok(())
}
