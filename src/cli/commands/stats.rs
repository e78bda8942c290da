use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::times_readable;
use crate::utils::time::parse_optional_timestamp;

/// Print today / this-week / this-month counts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { at } = cmd {
        let now = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(date::now);

        let pool = DbPool::new(&cfg.database)?;

        let snapshot = StatsLogic::refresh(&pool.conn, cfg.week_start(), now)?;

        header(format!("Moments as of {}", now.format("%Y-%m-%d %H:%M")));
        println!("  Today:      {}", times_readable(snapshot.today));
        println!("  This week:  {}", times_readable(snapshot.week));
        println!("  This month: {}", times_readable(snapshot.month));
    }

    Ok(())
}
