//! Mock port implementations shared by the integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use edge_executor::LocalExecutor;
use petfeeder::app::events::AppEvent;
use petfeeder::app::ports::EventSink;

/// Event sink whose log stays readable after the sink is moved into a task.
#[derive(Clone, Default)]
pub struct SharedSink {
    pub events: Rc<RefCell<Vec<AppEvent>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn levels_updates(&self) -> usize {
        self.count(|e| matches!(e, AppEvent::LevelsUpdated(_)))
    }
}

impl EventSink for SharedSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Run every ready task until the executor is idle.
pub fn drain(executor: &LocalExecutor<'_, 8>) {
    while executor.try_tick() {}
}
