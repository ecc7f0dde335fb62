//! Peak-hour windows during which the restriction applies.

use std::fmt;

use crate::models::TimeValue;

/// An inclusive window of clock time, in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start: u32,
    end: u32,
}

impl PeakWindow {
    /// Creates a window from `start_hour:start_minute` to
    /// `end_hour:end_minute`, both inclusive.
    pub const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start: start_hour * 60 + start_minute,
            end: end_hour * 60 + end_minute,
        }
    }

    /// Returns true if `time` falls within the window, endpoints included.
    pub fn contains(&self, time: TimeValue) -> bool {
        (self.start..=self.end).contains(&time.minutes_from_midnight())
    }
}

impl fmt::Display for PeakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Morning and evening peak hours: 07:00-09:30 and 16:00-19:30.
pub const PEAK_WINDOWS: [PeakWindow; 2] = [PeakWindow::new(7, 0, 9, 30), PeakWindow::new(16, 0, 19, 30)];

/// Returns true if `time` falls within any peak-hour window.
///
/// # Example
///
/// ```
/// use pico_placa::models::TimeValue;
/// use pico_placa::restriction::is_peak_time;
///
/// assert!(is_peak_time("07:00".parse::<TimeValue>().unwrap()));
/// assert!(is_peak_time("19:30".parse::<TimeValue>().unwrap()));
/// assert!(!is_peak_time("09:31".parse::<TimeValue>().unwrap()));
/// ```
pub fn is_peak_time(time: TimeValue) -> bool {
    PEAK_WINDOWS.iter().any(|window| window.contains(time))
}
