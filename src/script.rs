use trb::commands::Command;
use trb::input::InputEvent;
use trb::Result;

use std::path::Path;

use csv::{ReaderBuilder, Trim};

/// Reads every row of a batch script, pairing each parsed command (or the reason it
/// could not be parsed) with its 1-based row number, header excluded
pub fn read_commands(path: &Path) -> Result<Vec<(usize, Result<Command>)>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let commands = rdr
        .deserialize::<InputEvent>()
        .enumerate()
        .map(|(idx, record)| {
            log::debug!("Parsing record into Command: {record:?}");

            let command = record
                .map_err(anyhow::Error::from)
                .and_then(InputEvent::parse_command);

            (idx + 1, command)
        })
        .collect();

    return Ok(commands);
}
