//! Simulated food and water reservoir levels.
//!
//! There is no real level sensor behind the dashboard; each tick applies a
//! biased random walk to both reservoirs instead:
//!
//! ```text
//!   food'  = clamp(food  + (rand() - 0.55) * 6, 10, 100)
//!   water' = clamp(water + (rand() - 0.45) * 5, 10, 100)
//! ```
//!
//! Offsets, amplitudes and bounds come from [`FeederConfig`].  Values that
//! would cross a bound are pinned to it, not reflected.

use log::debug;
use serde::Serialize;

use crate::app::ports::RandomSource;
use crate::config::FeederConfig;

/// Percentage fill of the two reservoirs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveLevels {
    pub food: f64,
    pub water: f64,
}

impl LiveLevels {
    /// Food level rounded to a whole percent, as shown on the dashboard.
    pub fn food_percent(&self) -> u8 {
        self.food.round() as u8
    }

    pub fn water_percent(&self) -> u8 {
        self.water.round() as u8
    }
}

/// Lifecycle of the simulator task driving a [`LevelSimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorState {
    /// A tick task is scheduled.
    Running,
    /// No tick task is scheduled.
    Stopped,
}

/// Random-walk parameters for one reservoir.
#[derive(Debug, Clone, Copy)]
struct Drift {
    offset: f64,
    scale: f64,
}

impl Drift {
    fn step(self, value: f64, sample: f64, floor: f64, ceiling: f64) -> f64 {
        (value + (sample - self.offset) * self.scale).clamp(floor, ceiling)
    }
}

/// Level state plus the drift model that advances it.
#[derive(Debug, Clone)]
pub struct LevelSimulator {
    levels: LiveLevels,
    food: Drift,
    water: Drift,
    floor: f64,
    ceiling: f64,
    state: SimulatorState,
    ticks: u64,
}

impl LevelSimulator {
    pub fn new(config: &FeederConfig) -> Self {
        let floor = config.level_floor_percent;
        let ceiling = config.level_ceiling_percent;
        Self {
            levels: LiveLevels {
                food: config.initial_food_percent.clamp(floor, ceiling),
                water: config.initial_water_percent.clamp(floor, ceiling),
            },
            food: Drift {
                offset: config.food_drift_offset,
                scale: config.food_drift_scale,
            },
            water: Drift {
                offset: config.water_drift_offset,
                scale: config.water_drift_scale,
            },
            floor,
            ceiling,
            state: SimulatorState::Stopped,
            ticks: 0,
        }
    }

    /// Advance both reservoirs by one step.  Food draws first, then water.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> LiveLevels {
        let food_sample = rng.next_unit();
        let water_sample = rng.next_unit();
        self.levels = LiveLevels {
            food: self.food.step(self.levels.food, food_sample, self.floor, self.ceiling),
            water: self.water.step(self.levels.water, water_sample, self.floor, self.ceiling),
        };
        self.ticks += 1;
        debug!(
            "Levels: tick {} food={:.2}% water={:.2}%",
            self.ticks, self.levels.food, self.levels.water
        );
        self.levels
    }

    pub fn levels(&self) -> LiveLevels {
        self.levels
    }

    pub fn state(&self) -> SimulatorState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: SimulatorState) {
        self.state = state;
    }

    /// Ticks applied since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
