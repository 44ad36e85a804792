use rtimekeeper::core::engine::{Command, Signal, TimerEngine};
use rtimekeeper::models::{Direction, EditField, Mode, TimerState};

fn running(mode: Mode, elapsed: u64) -> TimerState {
    TimerState {
        elapsed,
        mode,
        paused: false,
        ..TimerState::default()
    }
}

#[test]
fn test_defaults() {
    let s = TimerState::default();
    assert_eq!(s.elapsed, 0);
    assert!(s.paused);
    assert_eq!(s.mode, Mode::Stopwatch);
    assert_eq!(s.editing, EditField::None);
}

#[test]
fn test_stopwatch_counts_up_for_every_tick() {
    for initial in [0u64, 7, 3599] {
        let mut state = running(Mode::Stopwatch, initial);
        for n in 1..=120u64 {
            let t = TimerEngine::tick(&state);
            assert_eq!(t.signal, None);
            state = t.state;
            assert_eq!(state.elapsed, initial + n);
            assert!(!state.paused);
        }
    }
}

#[test]
fn test_countdown_stops_at_zero_after_exactly_k_ticks() {
    let n = 10;
    for k in 1..=n {
        let mut state = running(Mode::Countdown, k);
        for tick in 1..=n {
            let t = TimerEngine::tick(&state);
            state = t.state;
            if tick < k {
                assert_eq!(state.elapsed, k - tick);
                assert!(!state.paused);
                assert_eq!(t.signal, None);
            } else if tick == k {
                assert_eq!(state.elapsed, 0);
                assert!(state.paused);
                assert_eq!(t.signal, Some(Signal::Paused));
            } else {
                assert_eq!(state.elapsed, 0);
                assert!(state.paused);
                assert_eq!(t.signal, None);
            }
        }
    }
}

#[test]
fn test_tick_while_paused_keeps_elapsed() {
    let state = TimerState {
        elapsed: 42,
        ..TimerState::default()
    };
    let t = TimerEngine::tick(&state);
    assert_eq!(t.state, state);
    assert_eq!(t.signal, None);
}

#[test]
fn test_tick_while_editing_blinks_cursor_only() {
    let editing = TimerEngine::toggle_edit(&TimerState::default()).state;
    assert!(editing.cursor_visible);

    let t1 = TimerEngine::tick(&editing);
    assert!(!t1.state.cursor_visible);
    assert_eq!(t1.state.elapsed, editing.elapsed);

    let t2 = TimerEngine::tick(&t1.state);
    assert!(t2.state.cursor_visible);
}

#[test]
fn test_pause_or_resume_emits_signals() {
    let paused = TimerState::default();

    let resumed = TimerEngine::pause_or_resume(&paused);
    assert!(!resumed.state.paused);
    assert_eq!(resumed.signal, Some(Signal::Resumed));

    let again = TimerEngine::pause_or_resume(&resumed.state);
    assert!(again.state.paused);
    assert_eq!(again.signal, Some(Signal::Paused));
}

#[test]
fn test_pause_or_resume_leaves_edit_mode() {
    let editing = TimerEngine::toggle_edit(&TimerState::default()).state;
    assert!(editing.is_editing());

    let t = TimerEngine::pause_or_resume(&editing);
    assert_eq!(t.state.editing, EditField::None);
    assert!(!t.state.paused);
    assert_eq!(t.signal, Some(Signal::Resumed));
}

#[test]
fn test_reset_keeps_mode_and_pauses() {
    let state = running(Mode::Countdown, 90);
    let t = TimerEngine::reset(&state);
    assert_eq!(t.state.elapsed, 0);
    assert!(t.state.paused);
    assert_eq!(t.state.mode, Mode::Countdown);
    assert_eq!(t.signal, Some(Signal::Paused));

    let t2 = TimerEngine::reset(&t.state);
    assert_eq!(t2.signal, None);
}

#[test]
fn test_switch_mode_toggle_and_explicit() {
    let state = TimerState {
        elapsed: 300,
        ..TimerState::default()
    };

    let flipped = TimerEngine::apply(&state, Command::SwitchMode(None)).state;
    assert_eq!(flipped.mode, Mode::Countdown);
    assert_eq!(flipped.elapsed, 300);

    let back = TimerEngine::apply(&flipped, Command::SwitchMode(None)).state;
    assert_eq!(back.mode, Mode::Stopwatch);

    let explicit = TimerEngine::apply(&flipped, Command::SwitchMode(Some(Mode::Countdown))).state;
    assert_eq!(explicit.mode, Mode::Countdown);
}

#[test]
fn test_toggle_edit_from_running_pauses_first() {
    let state = running(Mode::Stopwatch, 5);
    let t = TimerEngine::toggle_edit(&state);
    assert!(t.state.paused);
    assert_eq!(t.state.editing, EditField::Second);
    assert_eq!(t.signal, Some(Signal::Paused));

    let out = TimerEngine::toggle_edit(&t.state);
    assert_eq!(out.state.editing, EditField::None);
    assert!(out.state.paused);
    assert_eq!(out.signal, None);
}

#[test]
fn test_adjust_fields_and_clamp_at_zero() {
    let mut state = TimerEngine::toggle_edit(&TimerState::default()).state;

    state = TimerEngine::move_cursor(&state, Direction::Up).state;
    assert_eq!(state.elapsed, 1);

    state = TimerEngine::move_cursor(&state, Direction::Left).state;
    assert_eq!(state.editing, EditField::Minute);
    state = TimerEngine::move_cursor(&state, Direction::Up).state;
    assert_eq!(state.elapsed, 61);

    state = TimerEngine::move_cursor(&state, Direction::Left).state;
    state = TimerEngine::move_cursor(&state, Direction::Left).state;
    assert_eq!(state.editing, EditField::Hour);
    state = TimerEngine::move_cursor(&state, Direction::Up).state;
    assert_eq!(state.elapsed, 3661);

    state = TimerEngine::move_cursor(&state, Direction::Down).state;
    state = TimerEngine::move_cursor(&state, Direction::Down).state;
    assert_eq!(state.elapsed, 0);
    assert!(state.paused);

    state = TimerEngine::move_cursor(&state, Direction::Right).state;
    state = TimerEngine::move_cursor(&state, Direction::Right).state;
    state = TimerEngine::move_cursor(&state, Direction::Right).state;
    assert_eq!(state.editing, EditField::Second);
}

#[test]
fn test_move_cursor_without_editing_is_noop() {
    let state = TimerState {
        elapsed: 10,
        ..TimerState::default()
    };
    for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let t = TimerEngine::move_cursor(&state, d);
        assert_eq!(t.state, state);
        assert_eq!(t.signal, None);
    }
}

#[test]
fn test_fullscreen_toggles() {
    let s = TimerEngine::apply(&TimerState::default(), Command::ToggleFullscreen).state;
    assert!(s.fullscreen);
    let s = TimerEngine::apply(&s, Command::ToggleFullscreen).state;
    assert!(!s.fullscreen);
}

#[test]
fn test_formatted_clock() {
    let s = TimerState {
        elapsed: 3 * 3600 + 4 * 60 + 5,
        ..TimerState::default()
    };
    assert_eq!(s.formatted(), "03:04:05");
    assert_eq!((s.hours(), s.minutes(), s.seconds()), (3, 4, 5));
}
