use chrono::NaiveDate;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::record::DailyRecord;
use crate::models::schedule::Schedule;
use crate::ui::messages;
use crate::utils::colors::{color_for_status, colorize_optional, RESET};
use crate::utils::table::{Column, Table};
use crate::utils::time::{current_clock_minutes, minutes_to_time, time_to_minutes, TIME_PLACEHOLDER};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Eval {
        date,
        entry,
        lunch_out,
        lunch_in,
        exit,
        now,
        profile,
        json,
    } = cmd
    {
        let profile = cfg.profile(profile.as_deref())?;

        let date = resolve_date(date)?;
        let mut record = DailyRecord::new(date);
        record.times.entry = entry.clone();
        record.times.lunch_out = lunch_out.clone();
        record.times.lunch_in = lunch_in.clone();
        record.times.exit_time_real = exit.clone();

        // --now pins the evaluation clock; otherwise read the wall clock once.
        let now_min = match now {
            Some(s) => time_to_minutes(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
            None => current_clock_minutes(),
        };

        let schedule = Engine::calculate_schedule(&record, profile, now_min);

        if *json {
            let out = serde_json::to_string_pretty(&schedule)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_schedule(&record, &schedule, now_min);
        }
    }

    Ok(())
}

fn resolve_date(date: &Option<String>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(d.clone())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn print_schedule(record: &DailyRecord, schedule: &Schedule, now_min: i64) {
    let mode = if schedule.is_simulated {
        "simulated"
    } else {
        "live"
    };
    println!(
        "\n=== {} @ {} ({}) ===",
        record.date_str(),
        minutes_to_time(now_min),
        mode
    );

    let mut table = Table::new(vec![
        Column {
            header: "WORKED".to_string(),
            width: 10,
        },
        Column {
            header: "STATUS".to_string(),
            width: 20,
        },
        Column {
            header: "LUNCH".to_string(),
            width: 22,
        },
        Column {
            header: "EXIT RANGE".to_string(),
            width: 15,
        },
    ]);

    let status_color = color_for_status(schedule.work_status);
    table.add_row(vec![
        colorize_optional(&schedule.worked_current),
        format!(
            "{}{}{}",
            status_color,
            schedule.work_remaining_text.as_deref().unwrap_or(""),
            RESET
        ),
        lunch_cell(schedule),
        schedule
            .exit_range_text
            .clone()
            .unwrap_or_else(|| TIME_PLACEHOLDER.to_string()),
    ]);

    print!("{}", table.render());

    if let Some(countdown) = &schedule.time_to_lunch_limit {
        messages::info(countdown);
    }

    for alert in &schedule.alerts {
        messages::alert(alert.level, &alert.message);
    }

    if let Some(trigger) = schedule.notification_trigger {
        messages::warning(format!(
            "Notification: {} ({} min to limit)",
            trigger.as_str(),
            schedule.minutes_to_limit.unwrap_or_default()
        ));
    }
}

fn lunch_cell(schedule: &Schedule) -> String {
    match (&schedule.lunch_duration, &schedule.lunch_status_text) {
        (Some(duration), Some(status)) => format!("{} ({})", duration, status),
        (None, Some(status)) => status.clone(),
        _ => TIME_PLACEHOLDER.to_string(),
    }
}
