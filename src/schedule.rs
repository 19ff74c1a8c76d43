//! Feeding schedule store.
//!
//! Holds the planned feeding and water-refill events for the day, kept in
//! time-of-day order at all times.
//!
//! ```text
//!   AddScheduleEntry ──▶ validate ──▶ push ──▶ stable sort by time
//!   RemoveScheduleEntry ──▶ retain(id != target)
//! ```
//!
//! The sort is stable, so entries sharing a time keep their insertion
//! order.  Ids come from a monotonic counter and are never reused, even
//! after the entry they named has been removed.

use core::fmt;
use core::str::FromStr;

use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════
//  Entry types
// ═══════════════════════════════════════════════════════════════

/// Opaque schedule entry identifier, rendered as `schedule-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schedule-{}", self.0)
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wall-clock time of day, minute resolution, 24h.
///
/// Field order makes the derived `Ord` chronological, which is the same
/// order as comparing the zero-padded `HH:MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidInput("time"));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:MM`.  Both fields must be exactly two digits.
    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = s.trim().split_once(':').ok_or(Error::InvalidInput("time"))?;
        let two_digits = |part: &str| -> Result<u8> {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidInput("time"));
            }
            part.parse().map_err(|_| Error::InvalidInput("time"))
        };
        Self::new(two_digits(h)?, two_digits(m)?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What a schedule entry dispenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Food,
    Water,
}

/// A single planned feeding or refill event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub time: TimeOfDay,
    pub title: String,
    pub detail: String,
    pub kind: FeedKind,
}

/// Caller-supplied fields for a new entry.  Text is trimmed on insert.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub time: TimeOfDay,
    pub title: String,
    pub detail: String,
    pub kind: FeedKind,
}

// ═══════════════════════════════════════════════════════════════
//  Store
// ═══════════════════════════════════════════════════════════════

/// The schedule store.  Entries are always sorted by time ascending.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
    next_id: u32,
}

impl ScheduleStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// The four-entry day plan every session starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let seed = [
            ((7, 0), "Desayuno energético", "70 g de croquetas + 200 ml de agua fresca", FeedKind::Food),
            ((13, 30), "Snack saludable", "40 g de dieta húmeda con suplemento de omega-3", FeedKind::Food),
            ((19, 0), "Cena balanceada", "80 g de croquetas light + 150 ml de agua", FeedKind::Food),
            ((21, 30), "Recarga nocturna", "250 ml de agua filtrada y fresca", FeedKind::Water),
        ];
        for ((hour, minute), title, detail, kind) in seed {
            let id = store.allocate_id();
            store.entries.push(ScheduleEntry {
                id,
                time: TimeOfDay { hour, minute },
                title: title.to_string(),
                detail: detail.to_string(),
                kind,
            });
        }
        store
    }

    /// Validate, insert and re-sort.  Returns the new entry's id.
    ///
    /// Rejects the entry if the title or detail is blank after trimming;
    /// the store is left untouched in that case.
    pub fn add(&mut self, new: NewEntry) -> Result<EntryId> {
        let title = new.title.trim();
        let detail = new.detail.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title"));
        }
        if detail.is_empty() {
            return Err(Error::InvalidInput("detail"));
        }

        let id = self.allocate_id();
        self.entries.push(ScheduleEntry {
            id,
            time: new.time,
            title: title.to_string(),
            detail: detail.to_string(),
            kind: new.kind,
        });
        // Vec::sort_by_key is stable: ties keep insertion order.
        self.entries.sort_by_key(|e| e.time);
        info!("Schedule: added {} at {} ({:?})", id, new.time, new.kind);
        Ok(id)
    }

    /// Remove the entry with `id`.  Returns `false` if it was not present.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!("Schedule: removed {}", id);
        } else {
            debug!("Schedule: remove {} ignored (not present)", id);
        }
        removed
    }

    /// Entries in display order (time ascending).
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: FeedKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
