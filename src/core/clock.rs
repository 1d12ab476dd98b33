//! Time source for record timestamps and rotation

use chrono::{DateTime, Local};

/// Supplies the current time to a [`Logger`](super::Logger).
///
/// The logger asks the clock once per emitted record; the same instant is
/// used for the line's timestamp and for choosing the day's file.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local> + Send + Sync,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}
