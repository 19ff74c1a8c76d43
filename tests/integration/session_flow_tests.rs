//! End-to-end session: user commands interleaved with simulator ticks,
//! read back through the dashboard snapshot.

use edge_executor::LocalExecutor;
use petfeeder::adapters::random::SequenceRandom;
use petfeeder::adapters::ticker::ChannelTicker;
use petfeeder::app::commands::AppCommand;
use petfeeder::app::service::AppService;
use petfeeder::config::FeederConfig;
use petfeeder::profile::{Diet, ProfileUpdate};
use petfeeder::schedule::{FeedKind, NewEntry};
use petfeeder::sensors::levels::SimulatorState;

use crate::mock_ports::{SharedSink, drain};

#[test]
fn commands_and_ticks_interleave() {
    let config = FeederConfig {
        initial_food_percent: 12.0,
        ..FeederConfig::default()
    };
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let mut app = AppService::new(&config).unwrap();
    let mut sink = SharedSink::new();

    let ticker = ChannelTicker::new();
    let feed = ticker.feeder();
    let mut handle = app
        .start(&executor, ticker, SequenceRandom::new(vec![0.0]), sink.clone(), &mut sink)
        .unwrap();

    feed.fire();
    drain(&executor);

    app.handle_command(
        AppCommand::AddScheduleEntry(NewEntry {
            time: "06:30".parse().unwrap(),
            title: "Madrugada".into(),
            detail: "100 ml de agua".into(),
            kind: FeedKind::Water,
        }),
        &mut sink,
    )
    .unwrap();
    app.handle_command(AppCommand::UpdateProfile(ProfileUpdate::SetDiet(Diet::Light)), &mut sink)
        .unwrap();
    app.handle_command(AppCommand::ToggleAlert("alert-1".into()), &mut sink)
        .unwrap();

    feed.fire();
    drain(&executor);

    let snap = app.snapshot();
    assert_eq!(snap.simulator, SimulatorState::Running);
    assert_eq!(snap.levels.food, 10.0, "food pinned at the floor");
    assert_eq!(snap.stats.food_percent, 10);
    assert_eq!(snap.stats.water_refills, 2);
    assert_eq!(snap.stats.pending_alerts, 1);
    assert_eq!(snap.schedule[0].time.to_string(), "06:30");
    // 6.5 * 35 * 0.88 = 200.2
    assert_eq!(snap.recommendation.food_g, 200);

    app.stop_simulator(&mut handle, &mut sink);
    assert_eq!(app.snapshot().simulator, SimulatorState::Stopped);
    assert_eq!(sink.levels_updates(), 2);
}
