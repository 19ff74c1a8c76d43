//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a subsystem against
//! mock ports.  Everything runs on one thread with a local executor; the
//! simulator is stepped by hand through a channel ticker.

mod mock_ports;
mod session_flow_tests;
mod simulator_lifecycle_tests;
