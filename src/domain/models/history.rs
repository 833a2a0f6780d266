use chrono::DateTime;
use chrono::Local;
use uuid::Uuid;

use super::AnalysisResult;

/// A retained copy of a past completed analysis, kept only in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub result: AnalysisResult,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(result: AnalysisResult) -> HistoryEntry {
        return HistoryEntry {
            id: HistoryEntry::create_id(),
            result,
            created_at: Local::now(),
        };
    }

    /// Ids only need to be unique for the lifetime of the process, so the
    /// first two UUID segments are plenty and stay readable in the UI.
    pub fn create_id() -> String {
        return Uuid::new_v4()
            .to_string()
            .split('-')
            .enumerate()
            .filter_map(|(idx, str)| {
                if idx > 1 {
                    return None;
                }
                return Some(str);
            })
            .collect::<Vec<&str>>()
            .join("-");
    }
}
