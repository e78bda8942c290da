pub mod chart;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod fs;
pub mod path;
pub mod table;
pub mod time;

// Re-export of the most used helpers
pub use formatting::times_readable;
