//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / level simulator (domain)
//! ```
//!
//! Driven adapters (randomness, timers, event sinks, configuration) implement
//! these traits.  The domain consumes them via generics, so tests can swap in
//! fixed sequences and manually driven tickers.

use crate::config::FeederConfig;

// ───────────────────────────────────────────────────────────────
// Random source (driven adapter: entropy → simulator)
// ───────────────────────────────────────────────────────────────

/// Uniform samples for the simulated sensor drift.
pub trait RandomSource {
    /// Next sample, uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

// ───────────────────────────────────────────────────────────────
// Ticker (driven adapter: clock → simulator task)
// ───────────────────────────────────────────────────────────────

/// Paces the level simulator task.  Each completed `next_tick` is one step.
#[allow(async_fn_in_trait)]
pub trait Ticker {
    async fn next_tick(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / UI)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, UI refresh, ...).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: file → domain)
// ───────────────────────────────────────────────────────────────

/// Loads session configuration.
///
/// Implementations MUST call [`FeederConfig::validate`] and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping them.
pub trait ConfigPort {
    /// Load configuration.  Returns [`FeederConfig::default()`] if the
    /// adapter has no stored configuration.
    fn load(&self) -> Result<FeederConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The configured source does not exist.
    NotFound,
    /// Stored config failed to deserialize.
    Corrupted(String),
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the backing store.
    IoError(std::io::Error),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted(msg) => write!(f, "config corrupted: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
