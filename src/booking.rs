//! Overlap rules shared by appointments and availability windows.
//!
//! Intervals are half-open, `[start, end)`: two bookings that merely touch
//! (one ends exactly when the next begins) do not conflict.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("end must be after start")]
    EmptyRange,
    #[error("interval overlaps {} - {}", .0.start, .0.end)]
    Overlap(TimeRange),
}

impl TimeRange {
    /// Zero-length and inverted ranges are rejected.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, BookingError> {
        if end <= start {
            return Err(BookingError::EmptyRange);
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Returns the first existing range that `proposed` would collide with.
pub fn find_conflict<I>(existing: I, proposed: &TimeRange) -> Option<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    existing.into_iter().find(|range| range.overlaps(proposed))
}

/// Decides whether `proposed` can be booked next to the provider's
/// `existing` bookings. Declared availability is not consulted.
pub fn check_bookable<I>(existing: I, proposed: &TimeRange) -> Result<(), BookingError>
where
    I: IntoIterator<Item = TimeRange>,
{
    match find_conflict(existing, proposed) {
        Some(range) => Err(BookingError::Overlap(range)),
        None => Ok(()),
    }
}
