use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `lunch` subcommand: the pre-save check for a lunch
/// departure/return pair. A rejected pair exits nonzero so scripts can
/// block the edit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lunch {
        lunch_out,
        lunch_in,
        profile,
    } = cmd
    {
        let profile = cfg.profile(profile.as_deref())?;
        let validation = Engine::validate_lunch_return(lunch_out, lunch_in, profile);

        if !validation.valid {
            let reason = validation
                .message
                .unwrap_or_else(|| "invalid lunch pair".to_string());
            return Err(AppError::LunchRejected(reason));
        }

        if validation.warning {
            messages::warning(validation.message.unwrap_or_default());
        } else {
            messages::success(format!("Lunch break {} - {} is compliant.", lunch_out, lunch_in));
        }
    }

    Ok(())
}
