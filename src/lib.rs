//! PetFeeder dashboard core.
//!
//! Exposes the session logic behind the feeder dashboard: the feeding
//! schedule, device alerts, pet profile, portion recommendations,
//! consumption history and the simulated reservoir levels.  Everything is
//! in-memory and scoped to one [`AppService`](app::service::AppService).

#![deny(unused_must_use)]

pub mod adapters;
pub mod alerts;
pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod profile;
pub mod recommend;
pub mod schedule;
pub mod sensors;
pub mod sim_task;
