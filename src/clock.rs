//! Submission Time Stamps
//!
//! The server does not timestamp to-dos; the client sends the local wall-clock
//! reading as human-readable `date`/`time` strings.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same reading
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `date` as D-M-YYYY and `time` as H:M:S, unpadded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub date: String,
    pub time: String,
}

impl From<NaiveDateTime> for Stamp {
    fn from(at: NaiveDateTime) -> Self {
        Self {
            date: at.format("%-d-%-m-%Y").to_string(),
            time: at.format("%-H:%-M:%-S").to_string(),
        }
    }
}

impl Stamp {
    pub fn now(clock: &dyn Clock) -> Self {
        Self::from(clock.now())
    }
}
