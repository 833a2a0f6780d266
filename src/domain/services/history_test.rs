use std::collections::HashSet;

use super::History;
use crate::domain::models::AnalysisResult;
use crate::domain::models::HistoryEntry;

fn entry_with_percentage(match_percentage: u8) -> HistoryEntry {
    return HistoryEntry::new(AnalysisResult {
        match_percentage,
        matched_skills: vec!["SQL".to_string()],
        missing_skills: vec!["Kubernetes".to_string()],
        improvement_suggestions: vec!["Add cloud experience".to_string()],
    });
}

#[test]
fn it_lists_most_recent_first() {
    let mut history = History::default();
    history.push(entry_with_percentage(10));
    history.push(entry_with_percentage(20));
    history.push(entry_with_percentage(30));

    let listed = history.list();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].result.match_percentage, 30);
    assert_eq!(listed[2].result.match_percentage, 10);
}

#[test]
fn it_evicts_the_oldest_entry_beyond_capacity() {
    let mut history = History::default();
    let first = entry_with_percentage(1);
    let first_id = first.id.to_string();
    history.push(first);

    for n in 2..=11 {
        history.push(entry_with_percentage(n));
    }

    let listed = history.list();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0].result.match_percentage, 11);
    assert!(listed.iter().all(|entry| return entry.id != first_id));
}

#[test]
fn it_never_lists_an_entry_twice() {
    let mut history = History::default();
    for n in 1..=15 {
        history.push(entry_with_percentage(n));
    }

    let ids = history
        .list()
        .iter()
        .map(|entry| return entry.id.to_string())
        .collect::<HashSet<String>>();

    assert_eq!(ids.len(), history.len());
}

#[test]
fn it_stays_empty_until_the_first_push() {
    let history = History::default();
    assert!(history.is_empty());
    assert!(history.list().is_empty());
}
