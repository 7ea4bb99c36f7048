//! Nanosecond lap timer with an injectable time source.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic time source in nanoseconds.
pub trait Clock {
    /// Nanoseconds since a fixed, clock-specific origin. Never decreases.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Wall time from [`Instant`], measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        // Saturates after ~584 years of uptime.
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        ManualClock {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, nanos: u64) {
        self.now.set(self.now.get().saturating_add(nanos));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}

/// Measures the time between consecutive [`tik`](NanoTimer::tik) calls.
///
/// ```
/// use cherry::timer::{ManualClock, NanoTimer};
///
/// let clock = ManualClock::new(0);
/// let mut timer = NanoTimer::with_clock(&clock);
/// clock.advance(1_500);
/// assert_eq!(timer.tik(), 1_500);
/// clock.advance(20);
/// assert_eq!(timer.tik(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct NanoTimer<C = MonotonicClock> {
    clock: C,
    last: u64,
}

impl NanoTimer {
    /// Starts a timer on the system's monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for NanoTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NanoTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        let last = clock.now();
        NanoTimer { clock, last }
    }

    /// Returns the nanoseconds since construction or the previous `tik`, and
    /// restarts the measurement.
    pub fn tik(&mut self) -> u64 {
        let now = self.clock.now();
        let lap = now.saturating_sub(self.last);
        self.last = now;
        lap
    }

    /// Nanoseconds since construction or the previous `tik`, without restarting.
    pub fn elapsed(&self) -> u64 {
        self.clock.now().saturating_sub(self.last)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
