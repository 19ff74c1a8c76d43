//! Random source adapters.
//!
//! - [`OsRandom`] draws from the operating system via `getrandom`.
//! - [`SequenceRandom`] replays a fixed list of samples, for deterministic
//!   simulator runs in tests.

use log::warn;

use crate::app::ports::RandomSource;

/// Uniform `[0, 1)` samples from OS entropy.
#[derive(Debug, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn next_unit(&mut self) -> f64 {
        let mut bytes = [0u8; 8];
        if let Err(e) = getrandom::fill(&mut bytes) {
            // Midpoint keeps the walk moving at its configured bias.
            warn!("OsRandom: entropy unavailable ({}), using 0.5", e);
            return 0.5;
        }
        // Top 53 bits fill an f64 mantissa exactly.
        (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays `samples` in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// `samples` must be non-empty; an empty list behaves like `[0.5]`.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = if samples.is_empty() { vec![0.5] } else { samples };
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.samples[self.cursor];
        self.cursor = (self.cursor + 1) % self.samples.len();
        v
    }
}
