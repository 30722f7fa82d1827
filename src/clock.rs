/// Timestamp source for `52=` and timestamp filler values
///
/// Production code reads the local wall clock on every call. Tests and benches
/// pin the time with `FixedClock` so output is byte-for-byte reproducible.

use crate::protocol::TIMESTAMP_FORMAT;
use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Current time as yyyyMMdd-HH:mm:ss
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Local wall clock, re-sampled on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
