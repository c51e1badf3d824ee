//! Deferred actions and the clock they are measured against
//!
//! Simulated latency (order processing, search debounce, notice timeouts) is
//! modelled as an action that becomes due at a fixed point in time. The store
//! owns a [`DeferredQueue`] and dispatches due actions from `Store::tick`.
//! Nothing can be cancelled once scheduled.
//!
//! Tests drive time with [`ManualClock`] instead of sleeping.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::actions::Action;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the unix epoch, used for ad-hoc ids
    fn now_millis(&self) -> u64 {
        u64::try_from(self.now().timestamp_millis()).unwrap_or_default()
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += to_time_delta(by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) fn to_time_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or_else(|_| TimeDelta::zero())
}

/// Handle for a scheduled action
///
/// Returned immediately when an action is deferred; the action itself is
/// delivered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug)]
struct Scheduled {
    due: DateTime<Utc>,
    ticket: Ticket,
    action: Action,
}

/// Actions waiting for their due time, ordered by due time
///
/// Actions with the same due time keep the order they were scheduled in.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Scheduled>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, ticket: Ticket, due: DateTime<Utc>, action: Action) {
        let position = self.entries.partition_point(|entry| entry.due <= due);
        self.entries.insert(
            position,
            Scheduled {
                due,
                ticket,
                action,
            },
        );
        log::debug!("Scheduled {:?} for {}", ticket, due);
    }

    /// Remove and return every action due at or before `now`
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<Action> {
        let split = self.entries.partition_point(|entry| entry.due <= now);
        self.entries
            .drain(..split)
            .map(|entry| {
                log::debug!("{:?} is due", entry.ticket);
                entry.action
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a ticket is still waiting
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.entries.iter().any(|entry| entry.ticket == ticket)
    }
}
