//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements   | Connects to                    |
//! |---------------|--------------|--------------------------------|
//! | `json_config` | ConfigPort   | JSON file on disk              |
//! | `log_sink`    | EventSink    | `log` facade                   |
//! | `random`      | RandomSource | OS entropy / fixed sequence    |
//! | `ticker`      | Ticker       | async-io-mini timer / channel  |

pub mod json_config;
pub mod log_sink;
pub mod random;
pub mod ticker;
