//! Recording a moment: the CLI counterpart of the one-tap log action.

use crate::core::stats::{StatsLogic, StatsSnapshot};
use crate::db::log::ttlog;
use crate::db::queries::insert_moment;
use crate::errors::AppResult;
use crate::models::moment::Moment;
use crate::utils::date;
use chrono::{NaiveDateTime, Weekday};
use rusqlite::Connection;

pub struct RecordLogic;

impl RecordLogic {
    /// Record one moment and return it with the refreshed headline counts.
    ///
    /// `at` defaults to the current local time; an explicit value backfills
    /// a missed entry. The insert happens before the snapshot is computed,
    /// so the just-recorded moment is always included. Storage failures
    /// propagate: the moment is not recorded and no counts are returned.
    pub fn record(
        conn: &Connection,
        at: Option<NaiveDateTime>,
        week_start: Weekday,
    ) -> AppResult<(Moment, StatsSnapshot)> {
        let now = date::now();
        let ts = at.unwrap_or(now);

        let mut moment = Moment::new(ts);
        moment.id = insert_moment(conn, &moment)?;

        // Audit entry is best-effort: a failed log line must not undo a
        // durable moment.
        if let Err(e) = ttlog(
            conn,
            "add",
            &moment.day_key,
            &format!("Moment recorded at {}", moment.timestamp_str()),
        ) {
            crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
        }

        let snapshot = StatsLogic::refresh(conn, week_start, now)?;

        Ok((moment, snapshot))
    }
}
