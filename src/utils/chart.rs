//! Horizontal bar chart rendering for the dashboard.

use crate::models::day_count::DayCount;
use crate::utils::colors::{RESET, color_for_bar};
use crate::utils::formatting::short_day_name;

const BAR_CHAR: char = '█';

/// Render one row per day: weekday, date, scaled bar, count.
/// Bars are scaled so the busiest day fills `max_width` columns.
pub fn render_bars(data: &[DayCount], max_width: usize) -> String {
    let peak = data.iter().map(|d| d.count).max().unwrap_or(0);
    let mut out = String::new();

    for dc in data {
        let bar_len = if peak > 0 {
            ((dc.count as f64 / peak as f64) * max_width as f64).round() as usize
        } else {
            0
        };

        let bar: String = std::iter::repeat_n(BAR_CHAR, bar_len).collect();
        let color = color_for_bar(dc.count, peak);

        out.push_str(&format!(
            "{} {}  {}{:<width$}{} {}\n",
            short_day_name(dc.day),
            dc.day.format("%Y-%m-%d"),
            color,
            bar,
            RESET,
            dc.count,
            width = max_width
        ));
    }

    out
}
