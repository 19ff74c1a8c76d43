//! Consumption history.
//!
//! Two fixed seven-sample series (grams per day over a week, grams per
//! week over seven weeks).  Nothing here mutates; the session only
//! chooses which series is shown.

use serde::Serialize;

/// Number of samples in each series.
pub const HISTORY_LEN: usize = 7;

/// Shortest bar drawn, in pixels.
pub const MIN_BAR_PX: f64 = 18.0;
/// Height of the tallest bar, in pixels.
pub const MAX_BAR_PX: f64 = 140.0;

const DAILY_SAMPLES: [u32; HISTORY_LEN] = [320, 280, 290, 340, 305, 295, 310];
const DAILY_LABELS: [&str; HISTORY_LEN] = ["L", "M", "X", "J", "V", "S", "D"];

const WEEKLY_SAMPLES: [u32; HISTORY_LEN] = [2150, 2080, 2200, 2300, 2180, 2240, 2210];
const WEEKLY_LABELS: [&str; HISTORY_LEN] = ["Sem1", "Sem2", "Sem3", "Sem4", "Sem5", "Sem6", "Sem7"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    #[default]
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistorySeries {
    pub mode: HistoryMode,
    pub samples: [u32; HISTORY_LEN],
    pub labels: [&'static str; HISTORY_LEN],
    /// Axis caption.
    pub unit: &'static str,
}

/// The fixed series for `mode`.
pub fn select(mode: HistoryMode) -> HistorySeries {
    match mode {
        HistoryMode::Daily => HistorySeries {
            mode,
            samples: DAILY_SAMPLES,
            labels: DAILY_LABELS,
            unit: "g por día",
        },
        HistoryMode::Weekly => HistorySeries {
            mode,
            samples: WEEKLY_SAMPLES,
            labels: WEEKLY_LABELS,
            unit: "g por semana",
        },
    }
}

/// Plain maximum of the series.
///
/// Returns 0 for an empty or all-zero series; dividing by that result is
/// undefined, so callers normalising bar heights should use [`scale_of`].
pub fn raw_scale_of(samples: &[u32]) -> u32 {
    samples.iter().copied().max().unwrap_or(0)
}

/// Maximum of the series, never less than 1.
pub fn scale_of(samples: &[u32]) -> u32 {
    raw_scale_of(samples).max(1)
}

/// Pixel height of each bar, `max(18, value / scale * 140)`.
pub fn bar_heights(samples: &[u32]) -> Vec<f64> {
    let scale = f64::from(scale_of(samples));
    samples
        .iter()
        .map(|&v| (f64::from(v) / scale * MAX_BAR_PX).max(MIN_BAR_PX))
        .collect()
}
