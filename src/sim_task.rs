//! Level simulator task — the one timer-driven actor in a session.
//!
//! Runs on an `edge-executor` local executor next to whatever else the
//! host drives.  A [`Ticker`] paces it; production uses a reactor timer
//! from `async-io-mini`, tests use a manually fed channel.
//!
//! ```text
//!  ┌───────────────────────────────────────────────────────────┐
//!  │  edge_executor::LocalExecutor                             │
//!  │  ┌─────────────────────────────────────────────────────┐  │
//!  │  │  level_loop                                         │  │
//!  │  │    ticker.next_tick().await                         │  │
//!  │  │    SharedLevels.borrow_mut().tick(rng)  ──▶ EventSink│  │
//!  │  └─────────────────────────────────────────────────────┘  │
//!  └───────────────────────────────────────────────────────────┘
//!          ▲
//!          │ Task<()> (drop = cancel)
//!   SimulatorHandle::stop()
//! ```
//!
//! Cancellation drops the executor task, so no tick can run after
//! [`SimulatorHandle::stop`] returns, whether or not a tick was already
//! scheduled.  Stop takes effect once; later calls are no-ops.

use edge_executor::{LocalExecutor, Task};
use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, RandomSource, Ticker};
use crate::error::{Result, SimulatorError};
use crate::sensors::SharedLevels;
use crate::sensors::levels::SimulatorState;

/// One tick per `next_tick`, until the task is dropped.
async fn level_loop<T, R, S>(levels: SharedLevels, mut ticker: T, mut rng: R, mut sink: S)
where
    T: Ticker,
    R: RandomSource,
    S: EventSink,
{
    loop {
        ticker.next_tick().await;
        // Borrow ends before the next await.
        let reading = levels.borrow_mut().tick(&mut rng);
        sink.emit(&AppEvent::LevelsUpdated(reading));
    }
}

/// Owner of a running simulator task.
///
/// Dropping the handle stops the task.
pub struct SimulatorHandle {
    task: Option<Task<()>>,
    levels: SharedLevels,
}

impl SimulatorHandle {
    /// Spawn the simulator onto `executor`.
    ///
    /// Fails with [`SimulatorError::AlreadyRunning`] if another task is
    /// already driving the same levels.
    pub fn spawn<'a, const C: usize, T, R, S>(
        executor: &LocalExecutor<'a, C>,
        levels: SharedLevels,
        ticker: T,
        rng: R,
        sink: S,
    ) -> Result<Self>
    where
        T: Ticker + 'a,
        R: RandomSource + 'a,
        S: EventSink + 'a,
    {
        {
            let mut sim = levels.borrow_mut();
            if sim.state() == SimulatorState::Running {
                warn!("Simulator: spawn refused, a task is already running");
                return Err(SimulatorError::AlreadyRunning.into());
            }
            sim.set_state(SimulatorState::Running);
        }

        let task = executor.spawn(level_loop(levels.clone(), ticker, rng, sink));
        info!("Simulator: started");
        Ok(Self {
            task: Some(task),
            levels,
        })
    }

    /// Cancel the task.  Returns `true` only for the call that stopped it.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        drop(task);
        let mut sim = self.levels.borrow_mut();
        sim.set_state(SimulatorState::Stopped);
        info!("Simulator: stopped after {} ticks", sim.ticks());
        true
    }

    pub fn state(&self) -> SimulatorState {
        if self.task.is_some() {
            SimulatorState::Running
        } else {
            SimulatorState::Stopped
        }
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
