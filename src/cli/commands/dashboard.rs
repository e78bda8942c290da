use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{DashboardLogic, resolve_range};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Render the per-day histogram and trend summary for the selected range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        range,
        date: anchor,
        from,
        to,
    } = cmd
    {
        let anchor = match anchor {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let from = parse_optional_date(from.as_ref())?;
        let to = parse_optional_date(to.as_ref())?;

        let (start, end) = resolve_range(*range, anchor, from, to, cfg.week_start())?;

        let pool = DbPool::new(&cfg.database)?;

        let rendered = DashboardLogic::render(&pool.conn, start, end, cfg.chart_width)?;
        print!("{}", rendered);
    }

    Ok(())
}

fn parse_optional_date(input: Option<&String>) -> AppResult<Option<chrono::NaiveDate>> {
    if let Some(s) = input {
        let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
        Ok(Some(d))
    } else {
        Ok(None)
    }
}
