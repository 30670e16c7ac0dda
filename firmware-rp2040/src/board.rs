//! Adapters from RP2040/embassy peripherals to the core traits.
//!
//! Thin newtypes instead of direct trait impls: both the traits and the
//! peripheral types live in other crates, so the orphan rule forbids the latter.

use embassy_rp::watchdog::Watchdog as RpWatchdog;
use embassy_time::Instant;
use mousebot_core::{Clock, Watchdog};

/// Hardware watchdog, already started.
pub struct HardwareWatchdog {
    inner: RpWatchdog,
}

impl HardwareWatchdog {
    /// Wrap a watchdog on which `start` has been called.
    #[must_use]
    pub fn new(inner: RpWatchdog) -> Self {
        Self { inner }
    }
}

impl Watchdog for HardwareWatchdog {
    #[inline]
    fn feed(&mut self) {
        self.inner.feed();
    }
}

/// Milliseconds since boot from the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
