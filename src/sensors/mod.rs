//! Sensor subsystem — the simulated reservoir levels and the handle the
//! session shares with the simulator task.
//!
//! The session and the simulator task run on the same thread, so the
//! [`LevelSimulator`] is shared through `Rc<RefCell<_>>`.  Every borrow is
//! short and never held across an `.await`.

pub mod levels;

use core::cell::RefCell;
use std::rc::Rc;

use levels::LevelSimulator;

/// Reservoir state shared between the session and its simulator task.
pub type SharedLevels = Rc<RefCell<LevelSimulator>>;

pub fn shared(simulator: LevelSimulator) -> SharedLevels {
    Rc::new(RefCell::new(simulator))
}
