mod common;
use chrono::Duration;
use common::at;
use rtimekeeper::core::engine::Signal;
use rtimekeeper::core::session_log::SessionLog;
use rtimekeeper::models::LogEntry;

#[test]
fn test_resume_then_pause_closes_entry() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut log = SessionLog::new();

    let id = log.on_resumed(t0);
    assert_eq!(id, 1);
    assert!(log.open_entry().is_some());

    let closed = log.on_paused(t0 + Duration::seconds(30));
    assert_eq!(closed, Some(1));
    assert!(log.open_entry().is_none());

    let entry = &log.entries()[0];
    assert_eq!(entry.duration(), Some(Duration::seconds(30)));
    assert_eq!(entry.start_str(), "09:00:00");
    assert_eq!(entry.stop_str().as_deref(), Some("09:00:30"));
}

#[test]
fn test_pause_without_open_entry_is_noop() {
    let mut log = SessionLog::new();
    assert_eq!(log.on_paused(at(2024, 1, 1, 9, 0, 0)), None);
    assert!(log.is_empty());
}

#[test]
fn test_ids_are_max_plus_one_after_delete() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut log = SessionLog::new();
    for i in 0..3 {
        log.apply(Signal::Resumed, t0 + Duration::minutes(i * 2));
        log.apply(Signal::Paused, t0 + Duration::minutes(i * 2 + 1));
    }
    assert_eq!(log.len(), 3);

    assert!(log.delete_entry(2));
    assert!(!log.delete_entry(2));

    let id = log.on_resumed(t0 + Duration::minutes(10));
    assert_eq!(id, 4);

    let ids: Vec<u32> = log.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_ids_continue_from_restored_entries() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut closed = LogEntry::open(7, t0);
    closed.stop_time = Some(t0 + Duration::seconds(5));

    let mut log = SessionLog::from_entries(vec![closed]);
    assert_eq!(log.on_resumed(t0 + Duration::minutes(1)), 8);
}

#[test]
fn test_at_most_one_open_entry() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut log = SessionLog::from_entries(vec![LogEntry::open(1, t0)]);

    let id = log.on_resumed(t0 + Duration::seconds(10));
    assert_eq!(id, 2);

    let open: Vec<&LogEntry> = log.entries().iter().filter(|e| e.is_open()).collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, 2);
    assert_eq!(
        log.entries()[0].stop_time,
        Some(t0 + Duration::seconds(10))
    );
}

#[test]
fn test_entries_serialize_as_plain_array() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut log = SessionLog::new();
    log.on_resumed(t0);

    let json = serde_json::to_value(&log).expect("serialize");
    let array = json.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["id"], 1);
    assert!(array[0]["stop_time"].is_null());

    let restored: SessionLog = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, log);
}

#[test]
fn test_id_after_highest_possible_id_reuses_lowest_free() {
    let t0 = at(2024, 1, 1, 9, 0, 0);
    let mut top = LogEntry::open(u32::MAX, t0);
    top.stop_time = Some(t0 + Duration::seconds(1));
    let mut first = LogEntry::open(1, t0);
    first.stop_time = Some(t0 + Duration::seconds(1));

    let mut log = SessionLog::from_entries(vec![first, top]);
    let id = log.on_resumed(t0 + Duration::minutes(1));
    assert_eq!(id, 2);

    let mut ids: Vec<u32> = log.entries().iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}
