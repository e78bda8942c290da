pub mod backup;
pub mod dashboard;
pub mod log;
pub mod record;
pub mod stats;
