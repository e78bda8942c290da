/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Bar color for a histogram row:
/// zero → grey, peak of the range → magenta, otherwise cyan.
pub fn color_for_bar(count: i64, peak: i64) -> &'static str {
    if count == 0 {
        GREY
    } else if count == peak {
        MAGENTA
    } else {
        CYAN
    }
}
