use crate::core::prelude::*;

use std::time::Duration;

/// When a collision predicate should be re-evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// Push-based: whenever an input changes.
    OnChange,
    /// Rate-limited: at most once per interval, however often inputs change.
    Every(Duration),
}

impl Cadence {
    /// The poll driving this cadence, if it is rate-limited.
    pub fn to_poll(self) -> Result<Option<IntervalPoll>> {
        match self {
            Cadence::OnChange => Ok(None),
            Cadence::Every(interval) => IntervalPoll::new(interval).map(Some),
        }
    }
}

/// A fixed-interval poll driven by explicit elapsed time.
///
/// Each [`advance()`](IntervalPoll::advance) runs the check at most once, however much time has
/// passed. Polls that fell due in the meantime are dropped rather than replayed, which bounds
/// the work done per unit time.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
/// use std::time::Duration;
///
/// let mut poll = IntervalPoll::new(Duration::from_millis(100)).unwrap();
/// assert_eq!(poll.advance(Duration::from_millis(60), || 1), None);
/// assert_eq!(poll.advance(Duration::from_millis(60), || 2), Some(2));
/// assert_eq!(poll.advance(Duration::from_secs(10), || 3), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct IntervalPoll {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalPoll {
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            bail!("poll interval must be non-zero");
        }
        Ok(Self {
            interval,
            elapsed: Duration::ZERO,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn time_until_next(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Advances the clock by `dt` and runs `check` if a poll is due.
    pub fn advance<R>(&mut self, dt: Duration, check: impl FnOnce() -> R) -> Option<R> {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.interval {
            return None;
        }
        let interval = self.interval.as_nanos();
        let due = self.elapsed.as_nanos() / interval;
        let remainder = self.elapsed.as_nanos() % interval;
        self.elapsed = Duration::from_nanos(u64::try_from(remainder).unwrap_or(u64::MAX));
        check!(self.elapsed < self.interval);
        if due > 1 {
            debug!("IntervalPoll: dropped {} missed polls", due - 1);
        }
        Some(check())
    }
}

/// Emits a value only when it differs from the last one emitted.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let mut monitor = Monitor::new();
/// assert_eq!(monitor.update(false), Some(false));
/// assert_eq!(monitor.update(false), None);
/// assert_eq!(monitor.update(true), Some(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Monitor<V> {
    last: Option<V>,
}

impl<V: PartialEq + Clone> Monitor<V> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// The first value is always emitted.
    pub fn update(&mut self, value: V) -> Option<V> {
        if self.last.as_ref() == Some(&value) {
            None
        } else {
            self.last = Some(value.clone());
            Some(value)
        }
    }

    pub fn last(&self) -> Option<&V> {
        self.last.as_ref()
    }
}
