//! Time-of-day ticks for the sidebar next to a laid-out day.
//!
//! Ticks are pure data: a 12-hour label, its AM/PM period, a vertical offset
//! and whether the label should be displayed. Drawing them is up to the
//! caller.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{LayoutError, Result};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Options for [`generate_ticks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOptions {
    /// Minutes between consecutive ticks.
    pub interval_minutes: u32,
    /// Minute of the day of the first tick.
    pub start_minute: u32,
    /// Minute of the day at or before which the last tick falls.
    pub end_minute: u32,
}

impl Default for AxisOptions {
    /// Every half hour from 9:00 AM to 9:00 PM.
    fn default() -> Self {
        Self {
            interval_minutes: 30,
            start_minute: 9 * 60,
            end_minute: 21 * 60,
        }
    }
}

/// One sidebar tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
    /// 12-hour clock label without period, e.g. `"9:30"`.
    pub label: String,
    /// `"AM"` or `"PM"`.
    pub period: String,
    /// Offset from the first tick in minutes (one pixel per minute).
    pub top: u32,
    /// `false` for half-hour ticks, which are drawn without a label.
    pub show: bool,
}

/// Generate ticks from `start_minute` to `end_minute` inclusive.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidAxis`] if the interval is zero, the start
/// is after the end, or the end falls outside the day.
///
/// # Examples
///
/// ```
/// use day_layout::time_axis::{generate_ticks, AxisOptions};
///
/// let ticks = generate_ticks(&AxisOptions::default()).unwrap();
/// assert_eq!(ticks.len(), 25);
/// assert_eq!(ticks[0].label, "9:00");
/// assert_eq!(ticks[24].period, "PM");
/// ```
pub fn generate_ticks(options: &AxisOptions) -> Result<Vec<Tick>> {
    let AxisOptions {
        interval_minutes,
        start_minute,
        end_minute,
    } = *options;

    if interval_minutes == 0 {
        return Err(LayoutError::InvalidAxis(
            "interval must be at least one minute".to_string(),
        ));
    }
    if start_minute > end_minute {
        return Err(LayoutError::InvalidAxis(format!(
            "start minute {start_minute} is after end minute {end_minute}"
        )));
    }
    if end_minute >= MINUTES_PER_DAY {
        return Err(LayoutError::InvalidAxis(format!(
            "end minute {end_minute} is outside the day (max {})",
            MINUTES_PER_DAY - 1
        )));
    }

    let mut ticks = Vec::new();
    let mut minute = start_minute;
    while minute <= end_minute {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0).ok_or_else(
            || LayoutError::InvalidAxis(format!("minute {minute} is not a time of day")),
        )?;
        ticks.push(Tick {
            label: time.format("%-I:%M").to_string(),
            period: time.format("%p").to_string(),
            top: minute - start_minute,
            show: time.minute() != 30,
        });
        match minute.checked_add(interval_minutes) {
            Some(next) => minute = next,
            None => break,
        }
    }

    tracing::debug!(ticks = ticks.len(), "generated time axis");
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axis_covers_nine_to_nine() {
        let ticks = generate_ticks(&AxisOptions::default()).unwrap();
        assert_eq!(ticks.len(), 25);

        let first = &ticks[0];
        assert_eq!(first.label, "9:00");
        assert_eq!(first.period, "AM");
        assert_eq!(first.top, 0);
        assert!(first.show);

        let last = ticks.last().unwrap();
        assert_eq!(last.label, "9:00");
        assert_eq!(last.period, "PM");
        assert_eq!(last.top, 720);
    }

    #[test]
    fn test_half_hours_hidden() {
        let ticks = generate_ticks(&AxisOptions::default()).unwrap();
        assert_eq!(ticks[1].label, "9:30");
        assert!(!ticks[1].show);
        assert!(ticks[2].show);
    }

    #[test]
    fn test_noon_and_midnight_render_as_twelve() {
        let options = AxisOptions {
            interval_minutes: 12 * 60,
            start_minute: 0,
            end_minute: 12 * 60,
        };
        let ticks = generate_ticks(&options).unwrap();
        assert_eq!(ticks.len(), 2);
        assert_eq!((ticks[0].label.as_str(), ticks[0].period.as_str()), ("12:00", "AM"));
        assert_eq!((ticks[1].label.as_str(), ticks[1].period.as_str()), ("12:00", "PM"));
    }

    #[test]
    fn test_end_not_on_interval_is_excluded() {
        let options = AxisOptions {
            interval_minutes: 45,
            start_minute: 60,
            end_minute: 140,
        };
        let ticks = generate_ticks(&options).unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1:00", "1:45"]);
        assert_eq!(ticks[1].top, 45);
    }

    #[test]
    fn test_single_tick_when_start_equals_end() {
        let options = AxisOptions {
            interval_minutes: 30,
            start_minute: 600,
            end_minute: 600,
        };
        assert_eq!(generate_ticks(&options).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let options = AxisOptions {
            interval_minutes: 0,
            ..AxisOptions::default()
        };
        let err = generate_ticks(&options).unwrap_err();
        assert!(err.to_string().contains("Invalid axis"), "got: {err}");
    }

    #[test]
    fn test_start_after_end_rejected() {
        let options = AxisOptions {
            start_minute: 800,
            end_minute: 700,
            ..AxisOptions::default()
        };
        assert!(matches!(
            generate_ticks(&options),
            Err(LayoutError::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_end_past_day_rejected() {
        let options = AxisOptions {
            end_minute: 24 * 60,
            ..AxisOptions::default()
        };
        assert!(generate_ticks(&options).is_err());
    }
}
