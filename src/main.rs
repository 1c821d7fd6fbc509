mod args;
mod config;
mod script;

use trb::commands::CommandOutcome;
use trb::Result;

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut service = trb::build_transaction_service();

    for (row, command) in script::read_commands(&config.script_path)? {
        let command = match command {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Row {row}: {e}");
                continue;
            }
        };

        match service.process_command(command) {
            Ok(CommandOutcome::Statement(statement)) => println!("{statement}"),
            Ok(CommandOutcome::TransactionApplied(false)) => log::warn!(
                "Row {row}: transaction not permitted (insufficient funds or limit reached)"
            ),
            Ok(outcome) => log::info!("Row {row}: {outcome:?}"),
            Err(e) => log::warn!("Row {row}: {e}"),
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}
