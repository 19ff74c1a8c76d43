//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) and the level simulator
//! task emit these through the [`EventSink`](super::ports::EventSink) port.
//! Adapters on the other side decide what to do with them: log them,
//! refresh a view, record them in a test.

use crate::history::HistoryMode;
use crate::schedule::{EntryId, FeedKind, TimeOfDay};
use crate::sensors::levels::LiveLevels;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The session has started (carries the initial reservoir levels).
    Started(LiveLevels),

    /// A schedule entry was created.
    EntryAdded {
        id: EntryId,
        time: TimeOfDay,
        kind: FeedKind,
    },

    /// A schedule entry was deleted.
    EntryRemoved(EntryId),

    /// An alert's acknowledged flag changed.
    AlertToggled { id: String, acknowledged: bool },

    /// A profile field changed; carries the fresh recommendation.
    ProfileUpdated { food_g: u32, water_ml: u32 },

    /// The history chart switched series.
    HistoryModeChanged(HistoryMode),

    /// The level simulator produced a new reading.
    LevelsUpdated(LiveLevels),

    /// The level simulator task was cancelled.
    SimulatorStopped { ticks: u64 },
}
