use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, load_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MomentExport;
use crate::ui::messages::warning;
use crate::utils::date::{end_of_day, parse_span, start_of_day};
use crate::utils::fs::ensure_writable;
use crate::utils::path::is_absolute;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export moments.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression:
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` spans of those.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let moments = match range {
            None => load_all(&pool.conn)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_all(&pool.conn)?,
            Some(r) => {
                let (start, end) = parse_span(r)?;
                load_between(&pool.conn, start_of_day(start), end_of_day(end))?
            }
        };

        if moments.is_empty() {
            warning("⚠️  No moments found for selected range.");
            return Ok(());
        }

        let rows: Vec<MomentExport> = moments.iter().map(MomentExport::from).collect();

        match &format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        // Audit entry is best-effort, like backup.
        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} moments as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }
}
