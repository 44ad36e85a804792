mod common;
use common::setup_test_db;
use rtimekeeper::core::log::LogLogic;
use rtimekeeper::db::migrate::applied_migrations;
use rtimekeeper::db::pool::DbPool;
use rtimekeeper::db::store::{SqliteStore, StateStore, keys};
use rtimekeeper::models::{Mode, TimerState};

#[test]
fn test_migrations_are_recorded_once() {
    let db_path = setup_test_db("store_migrations");

    let pool = DbPool::open(&db_path).expect("open db");
    let applied = applied_migrations(&pool.conn).expect("read migrations");
    assert_eq!(
        applied,
        vec![
            "20260301_0001_create_state_store".to_string(),
            "20260412_0002_log_operation_index".to_string(),
        ]
    );
    drop(pool);

    let pool = DbPool::open(&db_path).expect("reopen db");
    assert_eq!(applied_migrations(&pool.conn).unwrap().len(), 2);
}

#[test]
fn test_sqlite_store_roundtrip_and_overwrite() {
    let db_path = setup_test_db("store_roundtrip");
    let mut store = SqliteStore::open(&db_path).expect("open store");

    let state = TimerState {
        elapsed: 75,
        mode: Mode::Countdown,
        ..TimerState::default()
    };
    store.save(keys::TIMER_STATE, &state).unwrap();

    let mut newer = state.clone();
    newer.elapsed = 80;
    store.save(keys::TIMER_STATE, &newer).unwrap();
    drop(store);

    let store = SqliteStore::open(&db_path).unwrap();
    let loaded: Option<TimerState> = store.load(keys::TIMER_STATE).unwrap();
    assert_eq!(loaded, Some(newer));
}

#[test]
fn test_missing_and_malformed_values_load_as_none() {
    let mut store = SqliteStore::from_pool(DbPool::in_memory().unwrap());

    let missing: Option<TimerState> = store.load(keys::TIMER_STATE).unwrap();
    assert!(missing.is_none());

    store.put(keys::TIMER_STATE, "][").unwrap();
    let malformed: Option<TimerState> = store.load(keys::TIMER_STATE).unwrap();
    assert!(malformed.is_none());

    store.delete(keys::TIMER_STATE).unwrap();
    assert_eq!(store.get(keys::TIMER_STATE).unwrap(), None);
}

#[test]
fn test_audit_rows_are_filterable() {
    let db_path = setup_test_db("store_audit");
    let mut store = SqliteStore::open(&db_path).unwrap();
    store.audit("resume", "log 1", "Timer resumed at 00:00:00");
    store.audit("pause", "", "Timer paused at 00:00:05");
    drop(store);

    let mut pool = DbPool::open(&db_path).unwrap();
    let resumes = LogLogic::load(&mut pool, Some("resume")).unwrap();
    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0].target, "log 1");

    let all = LogLogic::load(&mut pool, None).unwrap();
    assert!(all.iter().any(|r| r.operation == "pause"));
    assert!(all.iter().any(|r| r.operation == "migration_applied"));
}
