use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, load_between};
use crate::errors::AppResult;
use crate::models::moment::Moment;
use crate::ui::messages::info;
use crate::utils::date::{end_of_day, parse_span, start_of_day};
use crate::utils::table::{Column, Table};

/// List recorded moments, optionally filtered by a period expression.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let moments = if *now {
            let today = crate::utils::date::today();
            println!("📅 Moments for {}:\n", today);
            load_between(&pool.conn, start_of_day(today), end_of_day(today))?
        } else if let Some(p) = period {
            let (start, end) = parse_span(p)?;
            println!("📅 Moments from {} to {}:\n", start, end);
            load_between(&pool.conn, start_of_day(start), end_of_day(end))?
        } else {
            println!("📅 All recorded moments:\n");
            load_all(&pool.conn)?
        };

        if moments.is_empty() {
            info("No moments recorded for this period.");
            return Ok(());
        }

        print!("{}", render(&moments));
        println!("{} total", crate::utils::times_readable(moments.len() as i64));
    }

    Ok(())
}

fn render(moments: &[Moment]) -> String {
    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 6,
        },
        Column {
            header: "Timestamp".to_string(),
            width: 19,
        },
        Column {
            header: "Day".to_string(),
            width: 10,
        },
        Column {
            header: "Source".to_string(),
            width: 8,
        },
    ]);

    for m in moments {
        table.add_row(vec![
            m.id.to_string(),
            m.timestamp_str(),
            m.day_key.clone(),
            m.source.clone(),
        ]);
    }

    table.render()
}
