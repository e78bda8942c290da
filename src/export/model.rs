use crate::models::moment::Moment;
use serde::Serialize;

/// Flat row for CSV/JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct MomentExport {
    pub id: i64,
    pub timestamp: String,
    pub day_key: String,
    pub source: String,
}

impl From<&Moment> for MomentExport {
    fn from(m: &Moment) -> Self {
        Self {
            id: m.id,
            timestamp: m.timestamp_str(),
            day_key: m.day_key.clone(),
            source: m.source.clone(),
        }
    }
}
