use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::times_readable;
use crate::utils::time::parse_optional_timestamp;

/// Record one anxiety moment and print the refreshed counts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { at } = cmd {
        //
        // 1. Parse optional backfill timestamp
        //
        let at_parsed = parse_optional_timestamp(at.as_ref())?;

        //
        // 2. Open DB
        //
        let pool = DbPool::new(&cfg.database)?;

        //
        // 3. Execute logic; storage failures propagate untouched
        //
        let (moment, snapshot) = RecordLogic::record(&pool.conn, at_parsed, cfg.week_start())?;

        success(format!("Moment recorded at {}", moment.timestamp_str()));
        println!();
        println!("  Today:      {}", times_readable(snapshot.today));
        println!("  This week:  {}", times_readable(snapshot.week));
        println!("  This month: {}", times_readable(snapshot.month));
    }

    Ok(())
}
