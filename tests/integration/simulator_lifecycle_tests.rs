//! Simulator task lifecycle: start RUNNING, tick on demand, stop exactly
//! once, and never tick after teardown.

use edge_executor::LocalExecutor;
use petfeeder::adapters::random::SequenceRandom;
use petfeeder::adapters::ticker::ChannelTicker;
use petfeeder::app::events::AppEvent;
use petfeeder::app::service::AppService;
use petfeeder::config::FeederConfig;
use petfeeder::sensors::levels::{LiveLevels, SimulatorState};

use crate::mock_ports::{SharedSink, drain};

fn new_app() -> AppService {
    AppService::new(&FeederConfig::default()).unwrap()
}

#[test]
fn started_session_is_running() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let mut app = new_app();
    let mut sink = SharedSink::new();

    let handle = app
        .start(
            &executor,
            ChannelTicker::new(),
            SequenceRandom::new(vec![0.5]),
            SharedSink::new(),
            &mut sink,
        )
        .unwrap();
    assert_eq!(handle.state(), SimulatorState::Running);
    assert_eq!(app.simulator_state(), SimulatorState::Running);
    assert_eq!(app.snapshot().simulator, SimulatorState::Running);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Started(_))), 1);
}

#[test]
fn each_tick_updates_levels_and_emits() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let app = new_app();
    let ticker = ChannelTicker::new();
    let feed = ticker.feeder();
    let task_sink = SharedSink::new();

    let _handle = app
        .spawn_simulator(&executor, ticker, SequenceRandom::new(vec![0.0]), task_sink.clone())
        .unwrap();

    for _ in 0..3 {
        assert!(feed.fire());
        drain(&executor);
    }

    assert_eq!(app.tick_count(), 3);
    assert_eq!(task_sink.levels_updates(), 3);
    let l = app.levels();
    assert!((l.food - (78.0 - 3.0 * 3.3)).abs() < 1e-9);
    assert!((l.water - (72.0 - 3.0 * 2.25)).abs() < 1e-9);
    assert_eq!(
        task_sink.events.borrow().last(),
        Some(&AppEvent::LevelsUpdated(l))
    );
}

#[test]
fn no_tick_after_stop() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let app = new_app();
    let ticker = ChannelTicker::new();
    let feed = ticker.feeder();
    let task_sink = SharedSink::new();
    let mut session_sink = SharedSink::new();

    let mut handle = app
        .spawn_simulator(&executor, ticker, SequenceRandom::new(vec![0.9]), task_sink.clone())
        .unwrap();

    feed.fire();
    drain(&executor);
    assert_eq!(app.tick_count(), 1);

    // Queue a tick that is pending when teardown happens.
    feed.fire();
    app.stop_simulator(&mut handle, &mut session_sink);
    let frozen: LiveLevels = app.levels();

    for _ in 0..5 {
        feed.fire();
    }
    drain(&executor);

    assert_eq!(app.tick_count(), 1);
    assert_eq!(app.levels(), frozen);
    assert_eq!(task_sink.levels_updates(), 1);
    assert_eq!(app.simulator_state(), SimulatorState::Stopped);
}

#[test]
fn stop_emits_exactly_once() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let app = new_app();
    let mut session_sink = SharedSink::new();
    let mut handle = app
        .spawn_simulator(&executor, ChannelTicker::new(), SequenceRandom::new(vec![0.5]), SharedSink::new())
        .unwrap();

    app.stop_simulator(&mut handle, &mut session_sink);
    app.stop_simulator(&mut handle, &mut session_sink);
    drop(handle);

    assert_eq!(
        session_sink.count(|e| matches!(e, AppEvent::SimulatorStopped { .. })),
        1
    );
}

#[test]
fn dropping_handle_stops_simulator() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let app = new_app();
    let ticker = ChannelTicker::new();
    let feed = ticker.feeder();
    {
        let _handle = app
            .spawn_simulator(&executor, ticker, SequenceRandom::new(vec![0.0]), SharedSink::new())
            .unwrap();
    }
    assert_eq!(app.simulator_state(), SimulatorState::Stopped);
    feed.fire();
    drain(&executor);
    assert_eq!(app.tick_count(), 0);
}

#[test]
fn restart_after_stop_is_allowed() {
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let app = new_app();
    let mut sink = SharedSink::new();

    let mut first = app
        .spawn_simulator(&executor, ChannelTicker::new(), SequenceRandom::new(vec![0.5]), SharedSink::new())
        .unwrap();
    assert!(
        app.spawn_simulator(&executor, ChannelTicker::new(), SequenceRandom::new(vec![0.5]), SharedSink::new())
            .is_err()
    );
    app.stop_simulator(&mut first, &mut sink);

    let second = app
        .spawn_simulator(&executor, ChannelTicker::new(), SequenceRandom::new(vec![0.5]), SharedSink::new())
        .unwrap();
    assert_eq!(second.state(), SimulatorState::Running);
}
