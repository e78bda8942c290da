//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Human-readable occurrence count: "1 time", "5 times".
pub fn times_readable(n: i64) -> String {
    if n == 1 {
        "1 time".to_string()
    } else {
        format!("{} times", n)
    }
}

/// Short weekday label ("Mon", "Tue", …) for chart rows.
pub fn short_day_name(d: chrono::NaiveDate) -> String {
    d.format("%a").to_string()
}
