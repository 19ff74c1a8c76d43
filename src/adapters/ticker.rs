//! Ticker adapters for the level simulator task.
//!
//! - [`IntervalTicker`] — reactor-driven `async-io-mini` timer, one tick
//!   per configured interval (no busy-spinning).
//! - [`ChannelTicker`] — ticks whenever a [`TickFeeder`] pushes into an
//!   `embassy-sync` channel.  Used to step the simulator by hand.

use core::time::Duration;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use crate::app::ports::Ticker;

/// Fires once every `period`.
pub struct IntervalTicker {
    period: Duration,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(ms)))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Ticker for IntervalTicker {
    async fn next_tick(&mut self) {
        async_io_mini::Timer::after(self.period).await;
    }
}

/// Pending ticks a feeder can queue before `fire` starts failing.
const TICK_DEPTH: usize = 16;

type TickChannel = Channel<NoopRawMutex, (), TICK_DEPTH>;

/// Ticks on demand.  Single-threaded: the channel uses a no-op mutex.
pub struct ChannelTicker {
    channel: Rc<TickChannel>,
}

/// Sending half of a [`ChannelTicker`].
#[derive(Clone)]
pub struct TickFeeder {
    channel: Rc<TickChannel>,
}

impl ChannelTicker {
    pub fn new() -> Self {
        Self {
            channel: Rc::new(Channel::new()),
        }
    }

    pub fn feeder(&self) -> TickFeeder {
        TickFeeder {
            channel: self.channel.clone(),
        }
    }
}

impl Default for ChannelTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickFeeder {
    /// Queue one tick.  Returns `false` if the queue is full.
    pub fn fire(&self) -> bool {
        self.channel.try_send(()).is_ok()
    }
}

impl Ticker for ChannelTicker {
    async fn next_tick(&mut self) {
        self.channel.receive().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ticker_completes_per_fire() {
        let mut ticker = ChannelTicker::new();
        let feed = ticker.feeder();
        assert!(feed.fire());
        assert!(feed.fire());
        futures_lite::future::block_on(async {
            ticker.next_tick().await;
            ticker.next_tick().await;
        });
    }

    #[test]
    fn feeder_reports_full_queue() {
        let ticker = ChannelTicker::new();
        let feed = ticker.feeder();
        for _ in 0..TICK_DEPTH {
            assert!(feed.fire());
        }
        assert!(!feed.fire());
    }

    #[test]
    fn interval_ticker_waits_roughly_one_period() {
        let mut ticker = IntervalTicker::from_millis(20);
        assert_eq!(ticker.period(), Duration::from_millis(20));
        let start = std::time::Instant::now();
        futures_lite::future::block_on(ticker.next_tick());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
