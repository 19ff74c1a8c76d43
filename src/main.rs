//! PetFeeder demo session — host entry point.
//!
//! Hexagonal architecture with one timer-driven task.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  JsonConfigAdapter  LogEventSink   OsRandom     IntervalTicker │
//! │  (ConfigPort)       (EventSink)    (RandomSrc)  (Ticker)       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Schedule · Alerts · Profile · History · Levels        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  SimulatorHandle (edge-executor task, cancelled at teardown)   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `petfeeder [config.json]`.  Runs the session for
//! `session_secs`, stops the simulator and prints the final dashboard
//! snapshot as JSON on stdout.
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use edge_executor::LocalExecutor;
use log::info;

use petfeeder::adapters::json_config::JsonConfigAdapter;
use petfeeder::adapters::log_sink::LogEventSink;
use petfeeder::adapters::random::OsRandom;
use petfeeder::adapters::ticker::IntervalTicker;
use petfeeder::app::ports::ConfigPort;
use petfeeder::app::service::AppService;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("PetFeeder v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = JsonConfigAdapter::new(config_path.clone())
        .load()
        .with_context(|| match &config_path {
            Some(p) => format!("loading config from {}", p.display()),
            None => "loading default config".to_string(),
        })?;

    // ── 3. Session + level simulator task ─────────────────────
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let mut log_sink = LogEventSink::new();
    let mut app = AppService::new(&config)?;
    let mut simulator = app.start(
        &executor,
        IntervalTicker::from_millis(config.sim_interval_ms),
        OsRandom::new(),
        LogEventSink::new(),
        &mut log_sink,
    )?;

    info!(
        "Session running for {}s (tick every {}ms)",
        config.session_secs, config.sim_interval_ms
    );
    let session = Duration::from_secs(u64::from(config.session_secs));
    futures_lite::future::block_on(executor.run(async_io_mini::Timer::after(session)));

    // ── 4. Teardown ───────────────────────────────────────────
    app.stop_simulator(&mut simulator, &mut log_sink);

    let snapshot = serde_json::to_string_pretty(&app.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
