mod common;
use chrono::Duration;
use common::at;
use rtimekeeper::core::driver::TimerDriver;
use rtimekeeper::core::engine::{Command, Signal};
use rtimekeeper::db::store::{MemoryStore, StateStore, keys};
use rtimekeeper::models::{Direction, Mode, TimerState};

fn driver() -> TimerDriver<MemoryStore> {
    TimerDriver::load(MemoryStore::new(), Mode::Stopwatch).expect("load driver")
}

#[test]
fn test_five_ticks_produce_five_second_entry() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = driver();

    let signal = d.execute(Command::PauseOrResume, t0).expect("resume");
    assert_eq!(signal, Some(Signal::Resumed));

    for i in 1..=5 {
        d.tick(t0 + Duration::seconds(i)).expect("tick");
    }
    assert_eq!(d.state().elapsed, 5);

    let signal = d
        .execute(Command::PauseOrResume, t0 + Duration::seconds(5))
        .expect("pause");
    assert_eq!(signal, Some(Signal::Paused));

    assert_eq!(d.entries().len(), 1);
    let entry = &d.entries()[0];
    assert_eq!(entry.id, 1);
    assert_eq!(entry.duration(), Some(Duration::seconds(5)));
}

#[test]
fn test_state_survives_reload() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = driver();
    d.execute(Command::PauseOrResume, t0).unwrap();
    d.tick(t0 + Duration::seconds(1)).unwrap();
    d.tick(t0 + Duration::seconds(2)).unwrap();
    d.execute(Command::ToggleFullscreen, t0).unwrap();

    let before = d.state().clone();
    let entries = d.entries().to_vec();

    let restored = TimerDriver::load(d.into_store(), Mode::Countdown).unwrap();
    assert_eq!(restored.state(), &before);
    assert_eq!(restored.entries(), entries.as_slice());
    assert!(restored.state().fullscreen);
    assert_eq!(restored.state().mode, Mode::Stopwatch);
}

#[test]
fn test_default_mode_applies_without_snapshot() {
    let d = TimerDriver::load(MemoryStore::new(), Mode::Countdown).unwrap();
    assert_eq!(d.state().mode, Mode::Countdown);
    assert!(d.state().paused);
    assert_eq!(d.state().elapsed, 0);
}

#[test]
fn test_malformed_snapshot_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.put(keys::TIMER_STATE, "{not json").unwrap();
    store.put(keys::LOG_ENTRIES, "42").unwrap();

    let d = TimerDriver::load(store, Mode::Stopwatch).unwrap();
    assert_eq!(d.state(), &TimerState::default());
    assert!(d.entries().is_empty());
}

#[test]
fn test_partial_snapshot_uses_field_defaults() {
    let mut store = MemoryStore::new();
    store
        .put(keys::TIMER_STATE, r#"{"elapsed": 12, "mode": "countdown"}"#)
        .unwrap();

    let d = TimerDriver::load(store, Mode::Stopwatch).unwrap();
    assert_eq!(d.state().elapsed, 12);
    assert_eq!(d.state().mode, Mode::Countdown);
    assert!(d.state().paused);
}

#[test]
fn test_failed_save_reports_persistence_but_keeps_state() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = TimerDriver::load(MemoryStore::failing(), Mode::Stopwatch).unwrap();

    let err = d.execute(Command::PauseOrResume, t0).unwrap_err();
    assert!(err.is_persistence());
    assert!(!d.state().paused);
    assert!(d.log().open_entry().is_some());
}

#[test]
fn test_unchanged_tick_does_not_write() {
    let mut d = driver();
    d.tick(at(2024, 3, 4, 10, 0, 0)).unwrap();
    d.tick(at(2024, 3, 4, 10, 0, 1)).unwrap();
    assert_eq!(d.store().writes, 0);
}

#[test]
fn test_countdown_expiry_closes_open_entry() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = TimerDriver::load(MemoryStore::new(), Mode::Countdown).unwrap();

    d.execute(Command::ToggleEdit, t0).unwrap();
    d.execute(Command::MoveCursor(Direction::Up), t0).unwrap();
    d.execute(Command::MoveCursor(Direction::Up), t0).unwrap();
    d.execute(Command::ToggleEdit, t0).unwrap();
    assert_eq!(d.state().elapsed, 2);

    d.execute(Command::PauseOrResume, t0).unwrap();
    assert_eq!(d.tick(t0 + Duration::seconds(1)).unwrap(), None);
    assert_eq!(
        d.tick(t0 + Duration::seconds(2)).unwrap(),
        Some(Signal::Paused)
    );

    assert!(d.state().paused);
    assert_eq!(d.state().elapsed, 0);
    assert!(d.log().open_entry().is_none());
    assert_eq!(d.entries()[0].duration(), Some(Duration::seconds(2)));
}

#[test]
fn test_reset_and_mode_are_audited() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = driver();
    d.execute(Command::PauseOrResume, t0).unwrap();
    d.execute(Command::Reset, t0 + Duration::seconds(3)).unwrap();
    d.execute(Command::SwitchMode(None), t0).unwrap();

    assert_eq!(
        d.store().audit_trail,
        vec!["resume", "pause", "reset", "mode"]
    );
    assert!(d.log().open_entry().is_none());
}

#[test]
fn test_delete_entry_persists() {
    let t0 = at(2024, 3, 4, 10, 0, 0);
    let mut d = driver();
    d.execute(Command::PauseOrResume, t0).unwrap();
    d.execute(Command::PauseOrResume, t0 + Duration::seconds(1)).unwrap();

    assert!(d.delete_entry(1).unwrap());
    assert!(!d.delete_entry(1).unwrap());

    let restored = TimerDriver::load(d.into_store(), Mode::Stopwatch).unwrap();
    assert!(restored.entries().is_empty());
}

#[test]
fn test_display_name_roundtrip() {
    let mut d = driver();
    assert_eq!(d.display_name().unwrap(), None);

    assert!(d.set_display_name("   ").is_err());
    d.set_display_name("  Ada \n").unwrap();
    assert_eq!(d.display_name().unwrap().as_deref(), Some("Ada"));
}
