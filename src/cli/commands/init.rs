use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.config.as_deref())?;
    messages::success("Configuration initialized.");
    Ok(())
}
