use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::core::notify::NotificationSession;
use crate::errors::AppResult;
use crate::models::record::DailyRecord;
use crate::ui::messages;
use crate::utils::time::{current_clock_minutes, minutes_to_time};

/// Handle the `watch` subcommand: re-evaluate today's record on the
/// configured tick, printing a status line each time and each alert /
/// notification trigger only once per session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        entry,
        lunch_out,
        lunch_in,
        profile,
        ticks,
    } = cmd
    {
        let profile = cfg.profile(profile.as_deref())?;

        let mut record = DailyRecord::new(chrono::Local::now().date_naive());
        record.times.entry = entry.clone();
        record.times.lunch_out = lunch_out.clone();
        record.times.lunch_in = lunch_in.clone();

        let record_key = record.date_str();
        let mut session = NotificationSession::new();
        let mut reported_alerts: HashSet<String> = HashSet::new();
        let mut ticks_left = *ticks;

        loop {
            let now_min = current_clock_minutes();
            let schedule = Engine::calculate_schedule(&record, profile, now_min);

            println!(
                "[{}] worked {} | {}",
                minutes_to_time(now_min),
                schedule.worked_current,
                schedule.work_remaining_text.as_deref().unwrap_or("waiting for entry")
            );

            for alert in &schedule.alerts {
                if reported_alerts.insert(alert.message.clone()) {
                    messages::alert(alert.level, &alert.message);
                }
            }

            if let Some(trigger) = schedule.notification_trigger {
                if session.fire(&record_key, trigger) {
                    messages::warning(format!(
                        "Notification: {} ({} min to limit)",
                        trigger.as_str(),
                        schedule.minutes_to_limit.unwrap_or_default()
                    ));
                }
            }

            if let Some(n) = ticks_left.as_mut() {
                *n = n.saturating_sub(1);
                if *n == 0 {
                    break;
                }
            }

            thread::sleep(Duration::from_secs(cfg.tick_seconds));
        }
    }

    Ok(())
}
