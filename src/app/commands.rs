//! Inbound commands to the application service.
//!
//! These represent user actions (form submissions, toggles, selector
//! changes) that the [`AppService`](super::service::AppService) validates
//! and applies to the session state.

use crate::history::HistoryMode;
use crate::profile::ProfileUpdate;
use crate::schedule::{EntryId, NewEntry};

/// Commands that the input layer can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Submit a new schedule entry.
    AddScheduleEntry(NewEntry),

    /// Delete a schedule entry.  Unknown ids are ignored.
    RemoveScheduleEntry(EntryId),

    /// Flip an alert's acknowledged flag.  Unknown ids are ignored.
    ToggleAlert(String),

    /// Replace one pet profile field.
    UpdateProfile(ProfileUpdate),

    /// Switch the history chart between daily and weekly series.
    SelectHistory(HistoryMode),
}

/// What a successfully handled command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    EntryAdded(EntryId),
    EntryRemoved(EntryId),
    AlertToggled { acknowledged: bool },
    ProfileUpdated,
    HistorySelected(HistoryMode),
    /// The command referred to something that does not exist.
    NoChange,
}
