use chrono::{DateTime, Local, TimeZone};
use journali::{Clock, JournalStore};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Hands out queued timestamps (seconds since the epoch), one per entry.
pub struct ScriptedClock {
    times: RefCell<VecDeque<i64>>,
}

impl ScriptedClock {
    pub fn new(times: &[i64]) -> Self {
        ScriptedClock {
            times: RefCell::new(times.iter().copied().collect()),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> DateTime<Local> {
        let secs = self
            .times
            .borrow_mut()
            .pop_front()
            .expect("scripted clock ran out of timestamps");
        Local.timestamp_opt(secs, 0).unwrap()
    }
}

pub fn store_at(times: &[i64]) -> JournalStore<ScriptedClock> {
    JournalStore::with_clock(ScriptedClock::new(times))
}
