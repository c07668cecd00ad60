use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Handle the `profiles` subcommand: print the shift profile catalog.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![
        Column {
            header: "PROFILE".to_string(),
            width: 10,
        },
        Column {
            header: "TARGET".to_string(),
            width: 8,
        },
        Column {
            header: "LUNCH".to_string(),
            width: 8,
        },
        Column {
            header: "MIN LUNCH".to_string(),
            width: 10,
        },
        Column {
            header: "MAX EXTRA".to_string(),
            width: 10,
        },
    ]);

    for (name, profile) in &cfg.profiles {
        let label = if *name == cfg.default_profile {
            format!("{} *", name)
        } else {
            name.clone()
        };
        table.add_row(vec![
            label,
            mins2readable(profile.work_target_min as i64, false, true),
            mins2readable(profile.lunch_target_min as i64, false, true),
            mins2readable(profile.lunch_min_limit as i64, false, true),
            mins2readable(profile.max_extra_min as i64, false, true),
        ]);
    }

    print!("{}", table.render());
    println!("\n(* default profile)");

    Ok(())
}
