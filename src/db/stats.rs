use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL MOMENTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM moments", [], |row| row.get(0))?;
    println!(
        "{}• Total moments:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DAY RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT day_key FROM moments ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT day_key FROM moments ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Day range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) BUSIEST DAY + AVERAGE PER DAY
    //
    let busiest: Option<(String, i64)> = pool
        .conn
        .query_row(
            "SELECT day_key, COUNT(*) AS n FROM moments
             GROUP BY day_key ORDER BY n DESC, day_key ASC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    if let Some((day, n)) = busiest {
        println!("{}• Busiest day:{} {} ({})", CYAN, RESET, day, n);
    }

    if let (Some(f), Some(l)) = (first_day, last_day) {
        let d1 = parse_day(&f)?;
        let d2 = parse_day(&l)?;
        let days = (d2 - d1).num_days() + 1;

        let avg = count as f64 / days.max(1) as f64;
        println!("{}• Average moments/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_day(day_key: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(day_key, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
