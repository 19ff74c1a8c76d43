//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade, one `TAG | key=value` line per event.  A UI adapter
//! would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(levels) => {
                info!(
                    "START | food={}% water={}%",
                    levels.food_percent(),
                    levels.water_percent()
                );
            }
            AppEvent::EntryAdded { id, time, kind } => {
                info!("SCHED | added {} at {} kind={:?}", id, time, kind);
            }
            AppEvent::EntryRemoved(id) => {
                info!("SCHED | removed {}", id);
            }
            AppEvent::AlertToggled { id, acknowledged } => {
                info!("ALERT | {} acknowledged={}", id, acknowledged);
            }
            AppEvent::ProfileUpdated { food_g, water_ml } => {
                info!("PROFILE | food={}g/day water={}mL/day", food_g, water_ml);
            }
            AppEvent::HistoryModeChanged(mode) => {
                info!("HISTORY | mode={:?}", mode);
            }
            AppEvent::LevelsUpdated(levels) => {
                info!(
                    "LEVELS | food={:.1}% water={:.1}%",
                    levels.food, levels.water
                );
            }
            AppEvent::SimulatorStopped { ticks } => {
                info!("STOP | simulator ticks={}", ticks);
            }
        }
    }
}
