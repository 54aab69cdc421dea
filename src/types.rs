use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::angles::to_degrees;
use crate::error::{Error, Result};
use crate::time_basis::days_in_year;

pub const SECONDS_PER_DAY: u32 = 86_400;

// geometric horizon plus 0.833° of refraction
pub const REFRACTED_HORIZON_DEG: f64 = 90.833;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn seconds(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMoment {
    pub year: i32,
    pub day_of_year: u32,
    pub time: TimeOfDay,
}

impl CalendarMoment {
    pub fn new(year: i32, day_of_year: u32, time: TimeOfDay) -> Result<Self> {
        if day_of_year == 0 || day_of_year > days_in_year(year) {
            return Err(Error::InvalidDayOfYear { year, day_of_year });
        }
        Ok(Self {
            year,
            day_of_year,
            time,
        })
    }

    pub fn from_date_time(date: NaiveDate, time: TimeOfDay) -> Self {
        Self {
            year: date.year(),
            day_of_year: date.ordinal(),
            time,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, self.day_of_year)
    }
}

impl From<NaiveDateTime> for CalendarMoment {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_date_time(dt.date(), dt.time().into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    pub latitude: f64,
    // degrees east
    pub longitude: f64,
    pub timezone_offset_hours: f64,
}

impl ObserverLocation {
    pub fn new(latitude: f64, longitude: f64, timezone_offset_hours: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !(-180.0..=360.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        if !(-14.0..=14.0).contains(&timezone_offset_hours) {
            return Err(Error::InvalidTimezone(timezone_offset_hours));
        }
        Ok(Self {
            latitude,
            longitude,
            timezone_offset_hours,
        })
    }

    pub fn from_west_longitude(
        latitude: f64,
        longitude_west: f64,
        timezone_offset_hours: f64,
    ) -> Result<Self> {
        if !(-180.0..=360.0).contains(&longitude_west) {
            return Err(Error::InvalidLongitude(longitude_west));
        }
        Self::new(
            latitude,
            (-longitude_west).rem_euclid(360.0),
            timezone_offset_hours,
        )
    }

    pub const fn greenwich() -> Self {
        Self {
            latitude: 51.4769,
            longitude: 0.0,
            timezone_offset_hours: 0.0,
        }
    }

    pub const fn sao_paulo() -> Self {
        Self {
            latitude: -23.5558,
            longitude: 313.3604,
            timezone_offset_hours: -3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    pub zenith: f64,
    pub azimuth: Option<f64>,
}

impl SolarAngles {
    pub fn zenith_deg(&self) -> f64 {
        to_degrees(self.zenith)
    }

    pub fn elevation_deg(&self) -> f64 {
        90.0 - self.zenith_deg()
    }

    pub fn azimuth_deg(&self) -> Option<f64> {
        self.azimuth.map(to_degrees)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Sunrise,
    Sunset,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Sunrise => f.write_str("Sunrise"),
            EventKind::Sunset => f.write_str("Sunset"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvent {
    pub kind: EventKind,
    pub time: Option<TimeOfDay>,
    pub diff: Option<f64>,
}

impl SunEvent {
    pub fn found(&self) -> bool {
        self.time.is_some()
    }
}

impl fmt::Display for SunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(t) => write!(f, "{}: {}", self.kind, t),
            None => write!(f, "{}: approximately unknown", self.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatorConfig {
    pub sunrise_start: TimeOfDay,
    pub sunset_start: TimeOfDay,
    pub window_hours: u32,
    pub threshold_deg: f64,
    pub tolerance_deg: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            sunrise_start: TimeOfDay {
                hour: 3,
                minute: 0,
                second: 0,
            },
            sunset_start: TimeOfDay {
                hour: 15,
                minute: 0,
                second: 0,
            },
            window_hours: 8,
            threshold_deg: REFRACTED_HORIZON_DEG,
            tolerance_deg: 5.0,
        }
    }
}

impl LocatorConfig {
    pub fn start_for(&self, kind: EventKind) -> TimeOfDay {
        match kind {
            EventKind::Sunrise => self.sunrise_start,
            EventKind::Sunset => self.sunset_start,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_window(self.sunrise_start, self.window_hours)?;
        check_window(self.sunset_start, self.window_hours)?;
        check_tolerance(self.tolerance_deg)
    }
}

pub(crate) fn check_window(start: TimeOfDay, window_hours: u32) -> Result<()> {
    let start_seconds = start.seconds();
    let end = window_hours
        .checked_mul(3600)
        .and_then(|w| w.checked_add(start_seconds));
    match end {
        Some(end) if window_hours > 0 && end <= SECONDS_PER_DAY => Ok(()),
        _ => Err(Error::InvalidWindow {
            start_seconds,
            hours: window_hours,
        }),
    }
}

// Zero is accepted: with a strict `<` nothing can match, so the event is never found.
pub(crate) fn check_tolerance(tolerance_deg: f64) -> Result<()> {
    if !tolerance_deg.is_finite() || tolerance_deg < 0.0 {
        return Err(Error::InvalidTolerance(tolerance_deg));
    }
    Ok(())
}
