// =============================================================================
// CornerInch Web - Countdown Calculator
// =============================================================================
// Table of Contents:
// 1. Countdown Target
// 2. Remaining Time
// 3. Calculator
// =============================================================================

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

// -----------------------------------------------------------------------------
// 1. Countdown Target
// -----------------------------------------------------------------------------

/// The fixed instant the page counts down to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTarget {
    at: DateTime<FixedOffset>,
}

impl CountdownTarget {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// The launch instant, in the offset it was configured with.
    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// Time left between `now` and this target.
    pub fn remaining_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RemainingTime {
        remaining_until(now, &self.at)
    }
}

// -----------------------------------------------------------------------------
// 2. Remaining Time
// -----------------------------------------------------------------------------

/// Whole days, hours, minutes and seconds left until the target.
///
/// Never negative: once the target has passed every unit is zero and
/// `expired` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub expired: bool,
}

impl RemainingTime {
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        expired: true,
    };

    /// Split a whole-second count into display units.
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            expired: false,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Units in display order, paired with their labels.
    pub fn units(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}

// -----------------------------------------------------------------------------
// 3. Calculator
// -----------------------------------------------------------------------------

/// Compute the time left from `now` until `target`, truncated to whole seconds.
pub fn remaining_until<Tz: TimeZone>(
    now: &DateTime<Tz>,
    target: &DateTime<FixedOffset>,
) -> RemainingTime {
    // Compare at full precision; any positive gap is still counting down
    let delta = target.signed_duration_since(now);
    if delta <= TimeDelta::zero() {
        return RemainingTime::EXPIRED;
    }

    // delta > 0, so num_seconds() is non-negative and the cast cannot wrap
    RemainingTime::from_total_seconds(delta.num_seconds() as u64)
}
