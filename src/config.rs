use crate::args;

use trb::Result;

use std::path::PathBuf;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Overridden by `RUST_LOG`
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug)]
pub struct AppConfig {
    pub script_path: PathBuf,
}

/// Sets up logging, then reads the script location from the command line
pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(DEFAULT_LOG_LEVEL)
        .env()
        .init()?;

    let script_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {script_path:?}");

    return Ok(AppConfig { script_path });
}
