pub mod day_count;
pub mod moment;
