//! Application service — the hexagonal core.
//!
//! [`AppService`] is the session: it owns the schedule, alerts, pet
//! profile, history selection and the reservoir levels it shares with the
//! simulator task.  It exposes a clean, UI-agnostic API.  All output flows
//! through the [`EventSink`] port injected at call sites.
//!
//! ```text
//!   AppCommand ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │          AppService          │
//!   queries    ◀── │ Schedule · Alerts · Profile  │
//!                  │ History · SharedLevels       │
//!                  └──────────────┬───────────────┘
//!                                 │ Rc<RefCell<LevelSimulator>>
//!                          SimulatorHandle (task)
//! ```

use edge_executor::LocalExecutor;
use log::{info, warn};
use serde::Serialize;

use crate::alerts::{AlertItem, AlertStore};
use crate::config::FeederConfig;
use crate::error::{Error, Result};
use crate::history::{self, HistoryMode, HistorySeries};
use crate::profile::{PetProfile, ProfileStore};
use crate::recommend::Recommendation;
use crate::schedule::{FeedKind, ScheduleEntry, ScheduleStore};
use crate::sensors::levels::{LevelSimulator, LiveLevels, SimulatorState};
use crate::sensors::{self, SharedLevels};
use crate::sim_task::SimulatorHandle;

use super::commands::{AppCommand, CommandOutcome};
use super::events::AppEvent;
use super::ports::{ConfigError, EventSink, RandomSource, Ticker};

// ───────────────────────────────────────────────────────────────
// Read models
// ───────────────────────────────────────────────────────────────

/// Headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Food reservoir fill, whole percent.
    pub food_percent: u8,
    /// Water reservoir fill, whole percent.
    pub water_percent: u8,
    /// Scheduled food portions.
    pub food_portions: usize,
    /// Scheduled water refills.
    pub water_refills: usize,
    /// Alerts not yet acknowledged.
    pub pending_alerts: usize,
}

/// Chart data: the selected series plus its bar geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    #[serde(flatten)]
    pub series: HistorySeries,
    pub scale: u32,
    pub bar_heights_px: Vec<f64>,
}

/// Everything the dashboard renders, in one serialisable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub levels: LiveLevels,
    pub simulator: SimulatorState,
    pub schedule: Vec<ScheduleEntry>,
    pub alerts: Vec<AlertItem>,
    pub profile: PetProfile,
    pub recommendation: Recommendation,
    pub history: HistoryView,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// One dashboard session.  Dropping it discards all state.
pub struct AppService {
    schedule: ScheduleStore,
    alerts: AlertStore,
    profile: ProfileStore,
    levels: SharedLevels,
    history_mode: HistoryMode,
    min_water_ml: u32,
}

impl AppService {
    /// Build a session with the seeded schedule, alerts and profile.
    ///
    /// The config is validated first; a rejected config yields
    /// [`Error::InvalidConfig`].  The simulator stays STOPPED until
    /// [`start`](Self::start).
    pub fn new(config: &FeederConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            warn!("AppService: config rejected: {e}");
            match e {
                ConfigError::ValidationFailed(reason) => Error::InvalidConfig(reason),
                _ => Error::InvalidConfig("unreadable config"),
            }
        })?;
        Ok(Self {
            schedule: ScheduleStore::seeded(),
            alerts: AlertStore::seeded(),
            profile: ProfileStore::default(),
            levels: sensors::shared(LevelSimulator::new(config)),
            history_mode: HistoryMode::default(),
            min_water_ml: config.min_daily_water_ml,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the session: spawn the level simulator on `executor` and
    /// announce the initial levels on `sink`.
    ///
    /// On return the simulator is RUNNING.  Ticks are reported to
    /// `task_sink`; the returned handle owns the task and stops it when
    /// dropped.
    pub fn start<'a, const C: usize, T, R, S, E>(
        &mut self,
        executor: &LocalExecutor<'a, C>,
        ticker: T,
        rng: R,
        task_sink: S,
        sink: &mut E,
    ) -> Result<SimulatorHandle>
    where
        T: Ticker + 'a,
        R: RandomSource + 'a,
        S: EventSink + 'a,
        E: EventSink,
    {
        let handle = self.spawn_simulator(executor, ticker, rng, task_sink)?;
        sink.emit(&AppEvent::Started(self.levels()));
        info!(
            "AppService started: {} entries, {} alerts",
            self.schedule.len(),
            self.alerts.alerts().len()
        );
        Ok(handle)
    }

    /// Spawn the level simulator task on `executor`, sharing this
    /// session's levels.  Used by [`start`](Self::start) and to resume
    /// after [`stop_simulator`](Self::stop_simulator).
    pub fn spawn_simulator<'a, const C: usize, T, R, S>(
        &self,
        executor: &LocalExecutor<'a, C>,
        ticker: T,
        rng: R,
        sink: S,
    ) -> Result<SimulatorHandle>
    where
        T: Ticker + 'a,
        R: RandomSource + 'a,
        S: EventSink + 'a,
    {
        SimulatorHandle::spawn(executor, self.levels.clone(), ticker, rng, sink)
    }

    /// Tear down the simulator.  Emits `SimulatorStopped` the first time.
    pub fn stop_simulator(&self, handle: &mut SimulatorHandle, sink: &mut impl EventSink) {
        if handle.stop() {
            let ticks = self.levels.borrow().ticks();
            sink.emit(&AppEvent::SimulatorStopped { ticks });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one user command.
    ///
    /// Validation failures return an error and change nothing.  Commands
    /// naming an unknown id succeed with [`CommandOutcome::NoChange`] and
    /// emit no event.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> Result<CommandOutcome> {
        match cmd {
            AppCommand::AddScheduleEntry(new) => {
                let (time, kind) = (new.time, new.kind);
                let id = self.schedule.add(new)?;
                sink.emit(&AppEvent::EntryAdded { id, time, kind });
                Ok(CommandOutcome::EntryAdded(id))
            }
            AppCommand::RemoveScheduleEntry(id) => {
                if self.schedule.remove(id) {
                    sink.emit(&AppEvent::EntryRemoved(id));
                    Ok(CommandOutcome::EntryRemoved(id))
                } else {
                    Ok(CommandOutcome::NoChange)
                }
            }
            AppCommand::ToggleAlert(id) => match self.alerts.toggle_acknowledged(&id) {
                Some(acknowledged) => {
                    sink.emit(&AppEvent::AlertToggled { id, acknowledged });
                    Ok(CommandOutcome::AlertToggled { acknowledged })
                }
                None => Ok(CommandOutcome::NoChange),
            },
            AppCommand::UpdateProfile(update) => {
                self.profile.apply(update);
                let r = self.recommendation();
                sink.emit(&AppEvent::ProfileUpdated {
                    food_g: r.food_g,
                    water_ml: r.water_ml,
                });
                Ok(CommandOutcome::ProfileUpdated)
            }
            AppCommand::SelectHistory(mode) => {
                if mode != self.history_mode {
                    self.history_mode = mode;
                    sink.emit(&AppEvent::HistoryModeChanged(mode));
                }
                Ok(CommandOutcome::HistorySelected(mode))
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn schedule(&self) -> &[ScheduleEntry] {
        self.schedule.entries()
    }

    pub fn alerts(&self) -> &[AlertItem] {
        self.alerts.alerts()
    }

    pub fn profile(&self) -> &PetProfile {
        self.profile.profile()
    }

    /// Current reservoir levels.
    pub fn levels(&self) -> LiveLevels {
        self.levels.borrow().levels()
    }

    pub fn simulator_state(&self) -> SimulatorState {
        self.levels.borrow().state()
    }

    /// Simulator ticks applied so far.
    pub fn tick_count(&self) -> u64 {
        self.levels.borrow().ticks()
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history_mode
    }

    /// The selected series, its scale and bar heights.
    pub fn history(&self) -> HistoryView {
        let series = history::select(self.history_mode);
        HistoryView {
            scale: history::scale_of(&series.samples),
            bar_heights_px: history::bar_heights(&series.samples),
            series,
        }
    }

    /// Recomputed from the current profile on every call.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_profile(self.profile.profile(), self.min_water_ml)
    }

    pub fn stats(&self) -> DashboardStats {
        let levels = self.levels();
        DashboardStats {
            food_percent: levels.food_percent(),
            water_percent: levels.water_percent(),
            food_portions: self.schedule.count(FeedKind::Food),
            water_refills: self.schedule.count(FeedKind::Water),
            pending_alerts: self.alerts.pending_count(),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            stats: self.stats(),
            levels: self.levels(),
            simulator: self.simulator_state(),
            schedule: self.schedule().to_vec(),
            alerts: self.alerts().to_vec(),
            profile: self.profile().clone(),
            recommendation: self.recommendation(),
            history: self.history(),
        }
    }
}
