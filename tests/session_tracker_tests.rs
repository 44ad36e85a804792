mod common;
use chrono::{Duration, NaiveDate};
use common::at;
use rtimekeeper::core::sessions::SessionTracker;
use rtimekeeper::db::store::MemoryStore;
use rtimekeeper::models::TrackerPhase;

#[test]
fn test_start_pause_records_session() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut tracker = SessionTracker::new();
    assert_eq!(tracker.phase(), TrackerPhase::Idle);

    tracker.start(t0).unwrap();
    assert_eq!(tracker.running_ms(t0 + Duration::seconds(2)), 2000);

    let session = tracker.pause(t0 + Duration::minutes(3)).unwrap().clone();
    assert_eq!(session.duration, "00:03:00");
    assert_eq!(session.start_str(), "08:00:00");
    assert_eq!(session.pause_str(), "08:03:00");
    assert_eq!(session.resume_str(), None);
    assert_eq!(tracker.phase(), TrackerPhase::Paused);
    assert_eq!(tracker.running_ms(t0 + Duration::minutes(10)), 0);
}

#[test]
fn test_resume_stamps_last_session() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut tracker = SessionTracker::new();
    tracker.start(t0).unwrap();
    tracker.pause(t0 + Duration::minutes(1)).unwrap();
    tracker.resume(t0 + Duration::minutes(5)).unwrap();

    assert_eq!(tracker.phase(), TrackerPhase::Running);
    assert_eq!(
        tracker.history()[0].resume_str().as_deref(),
        Some("08:05:00")
    );

    let second = tracker.pause(t0 + Duration::minutes(7)).unwrap();
    assert_eq!(second.duration, "00:02:00");
    assert_eq!(tracker.history().len(), 2);
}

#[test]
fn test_invalid_transitions_are_errors() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut tracker = SessionTracker::new();

    assert!(tracker.pause(t0).is_err());
    assert!(tracker.resume(t0).is_err());

    tracker.start(t0).unwrap();
    assert!(tracker.start(t0).is_err());
    assert!(tracker.resume(t0).is_err());
    assert!(tracker.history().is_empty());
}

#[test]
fn test_reset_keeps_history() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut tracker = SessionTracker::new();
    tracker.start(t0).unwrap();
    tracker.pause(t0 + Duration::seconds(10)).unwrap();
    tracker.reset();

    assert_eq!(tracker.phase(), TrackerPhase::Idle);
    assert_eq!(tracker.started_at(), None);
    assert_eq!(tracker.history().len(), 1);
}

#[test]
fn test_remove_and_clear() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut tracker = SessionTracker::new();
    tracker.start(t0).unwrap();
    for i in 1..=3 {
        tracker.pause(t0 + Duration::minutes(i * 10)).unwrap();
        tracker.resume(t0 + Duration::minutes(i * 10 + 1)).unwrap();
    }
    assert_eq!(tracker.history().len(), 3);

    assert!(!tracker.remove(3));
    assert!(tracker.remove(0));
    assert_eq!(tracker.history().len(), 2);
    assert_eq!(tracker.history()[0].pause_str(), "08:20:00");

    tracker.clear();
    assert!(tracker.history().is_empty());
    assert_eq!(tracker.phase(), TrackerPhase::Running);
}

#[test]
fn test_sessions_on_filters_by_date() {
    let day1 = at(2024, 5, 6, 23, 0, 0);
    let mut tracker = SessionTracker::new();
    tracker.start(day1).unwrap();
    tracker.pause(day1 + Duration::minutes(30)).unwrap();
    tracker.resume(day1 + Duration::minutes(45)).unwrap();
    tracker.pause(day1 + Duration::minutes(90)).unwrap();

    let d1 = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
    assert_eq!(tracker.sessions_on(d1).len(), 1);
    assert_eq!(tracker.sessions_on(d2).len(), 1);
}

#[test]
fn test_tracker_persists_through_store() {
    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut store = MemoryStore::new();

    let mut tracker = SessionTracker::new();
    tracker.start(t0).unwrap();
    tracker.pause(t0 + Duration::seconds(90)).unwrap();
    tracker.save(&mut store).unwrap();

    let restored = SessionTracker::load(&store).unwrap();
    assert_eq!(restored, tracker);

    let empty = SessionTracker::load(&MemoryStore::new()).unwrap();
    assert_eq!(empty, SessionTracker::new());
}

#[test]
fn test_restored_paused_tracker_resumes() {
    use rtimekeeper::models::TrackerClock;

    let t0 = at(2024, 5, 6, 8, 0, 0);
    let mut original = SessionTracker::new();
    original.start(t0).unwrap();
    original.pause(t0 + Duration::minutes(2)).unwrap();

    let clock = TrackerClock {
        phase: TrackerPhase::Paused,
        started_at: Some(t0),
    };
    let mut tracker = SessionTracker::from_parts(clock, original.history().to_vec());
    assert_eq!(tracker, original);

    tracker.resume(t0 + Duration::minutes(3)).unwrap();
    assert_eq!(tracker.started_at(), Some(t0 + Duration::minutes(3)));
    assert_eq!(tracker.history()[0].resume_str().as_deref(), Some("08:03:00"));
}
