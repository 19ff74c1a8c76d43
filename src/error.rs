//! Unified error types for the PetFeeder core.
//!
//! A single `Error` enum that every store and the application service
//! convert into, keeping command handling uniform at the session boundary.
//! Variants are `Copy` and carry `&'static str` field names only, so they
//! can be returned from hot paths without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible domain operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A user-supplied value failed validation.  Carries the field name.
    InvalidInput(&'static str),
    /// A session was built from a config that failed validation.
    InvalidConfig(&'static str),
    /// The level simulator task was asked to do something in the wrong state.
    Simulator(SimulatorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(field) => write!(f, "invalid input: {field}"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::Simulator(e) => write!(f, "simulator: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Simulator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorError {
    /// A second simulator task was requested while one is still running.
    AlreadyRunning,
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "already running"),
        }
    }
}

impl From<SimulatorError> for Error {
    fn from(e: SimulatorError) -> Self {
        Self::Simulator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
