//! The interval model: event identity, event value type, and the overlap rule.
//!
//! Events are half-open ranges `[start, end)` measured in whole minutes from
//! the start of the rendered day. Two events that merely touch (one ends at
//! the minute the other starts) do not overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single event.
///
/// Accepts either a non-negative integer or a string, matching the two id
/// shapes calendar feeds commonly use. Ordering is total: every
/// [`EventId::Number`] sorts before every [`EventId::Text`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EventId {
    fn from(n: u64) -> Self {
        EventId::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

/// A single appointment on the day being laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Minutes from the start of the day (inclusive).
    pub start: u32,
    /// Minutes from the start of the day (exclusive).
    pub end: u32,
}

impl Event {
    pub fn new(id: impl Into<EventId>, start: u32, end: u32) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Length of the event in minutes. Zero for malformed (`start >= end`) events.
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether this event and `other` share at least one minute.
    ///
    /// Comparing an event with itself (same id) is always `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use day_layout::Event;
    ///
    /// let a = Event::new("a", 0, 60);
    /// let b = Event::new("b", 30, 90);
    /// let c = Event::new("c", 60, 120);
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c)); // back-to-back
    /// ```
    pub fn overlaps(&self, other: &Event) -> bool {
        self.id != other.id && ranges_overlap(self.start, self.end, other.start, other.end)
    }
}

/// Half-open overlap test on raw ranges.
pub(crate) fn ranges_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Indices of `events` in sweep order: `start` ascending, then `end`
/// ascending, then `id` ascending.
pub(crate) fn sweep_order(events: &[Event]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| {
        let (ea, eb) = (&events[a], &events[b]);
        ea.start
            .cmp(&eb.start)
            .then(ea.end.cmp(&eb.end))
            .then_with(|| ea.id.cmp(&eb.id))
    });
    order
}
