use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

pub const SHIFT_HOURS: u32 = 12;

const DAY_START_HOUR: u32 = 5;
const NIGHT_START_HOUR: u32 = 17;

/// Night offsets are folded into [-6, 18) hours around the shift start: the
/// twelve hours of the window, six hours after it and six hours before it.
const WRAP_THRESHOLD_HOURS: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Day,
    Night,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourMarker {
    pub label: String,
    pub left_percent: f64,
}

impl Shift {
    pub fn current(now: &DateTime<FixedOffset>) -> Shift {
        if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&now.hour()) {
            Shift::Day
        } else {
            Shift::Night
        }
    }

    pub fn start_hour(self) -> u32 {
        match self {
            Shift::Day => DAY_START_HOUR,
            Shift::Night => NIGHT_START_HOUR,
        }
    }

    /// Hours between the shift start and the wall-clock time of `at`.
    ///
    /// Only the time of day is considered. The day window stays within one
    /// calendar day, so its offset is the plain difference: 23:30 is past the
    /// window and 02:00 is before it. The night window crosses midnight, so
    /// times past midnight land inside it (02:00 is 9 hours in) and times
    /// shortly before 17:00 come out negative.
    pub fn hour_offset(self, at: &DateTime<FixedOffset>) -> f64 {
        let clock = f64::from(at.hour()) + f64::from(at.minute()) / 60.0;
        let offset = clock - f64::from(self.start_hour());
        if !self.crosses_midnight() {
            return offset;
        }
        let wrapped = offset.rem_euclid(24.0);
        if wrapped >= WRAP_THRESHOLD_HOURS {
            wrapped - 24.0
        } else {
            wrapped
        }
    }

    pub fn crosses_midnight(self) -> bool {
        self.start_hour() + SHIFT_HOURS > 24
    }

    /// Thirteen labelled markers, one per hour boundary of the window.
    pub fn hour_markers(self) -> Vec<HourMarker> {
        (0..=SHIFT_HOURS)
            .map(|i| HourMarker {
                label: format!("{}:00", (self.start_hour() + i) % 24),
                left_percent: f64::from(i) / f64::from(SHIFT_HOURS) * 100.0,
            })
            .collect()
    }
}

pub fn half_hour_ticks() -> Vec<f64> {
    (0..SHIFT_HOURS)
        .map(|i| (f64::from(i) + 0.5) / f64::from(SHIFT_HOURS) * 100.0)
        .collect()
}
