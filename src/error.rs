use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("day {day_of_year} is out of range for year {year}")]
    InvalidDayOfYear { year: i32, day_of_year: u32 },

    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32, second: u32 },

    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}° (must be between -180° and +360°, east positive)")]
    InvalidLongitude(f64),

    #[error("invalid timezone offset {0}h (must be between -14h and +14h)")]
    InvalidTimezone(f64),

    #[error("search window of {hours}h starting at second {start_seconds} leaves the day")]
    InvalidWindow { start_seconds: u32, hours: u32 },

    #[error("invalid tolerance {0}° (must be zero or positive)")]
    InvalidTolerance(f64),
}
