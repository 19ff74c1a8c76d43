//! Application core — pure domain logic, zero I/O.
//!
//! This module wires the PetFeeder session together: schedule, alerts,
//! pet profile, recommendations, history selection and the shared
//! reservoir levels.  All interaction with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable with fixed randomness and manual tickers.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
