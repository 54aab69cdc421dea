pub mod angles;
pub mod error;
pub mod input;
pub mod locator;
pub mod time_basis;
pub mod types;

pub use angles::{
    equation_of_time, hour_angle, normalize_angle, solar_azimuth, solar_declination,
    solar_noon_minutes, solar_position, solar_position_at, solar_zenith_angle, time_offset,
    to_degrees, to_radians, true_solar_time, MINUTES_PER_DEGREE,
};

pub use error::{Error, Result};

pub use input::{parse_date, parse_time, prompt_until_valid};

pub use locator::{find_event, find_sunrise, find_sunset, seconds_to_time, sun_events};

pub use time_basis::{
    day_of_year, days_in_months, days_in_year, days_since_j2000, fraction_of_day,
    fractional_year_angle, leap_year, local_moment, month_day, J2000_DAY_NUMBER,
};

pub use types::{
    CalendarMoment, EventKind, LocatorConfig, ObserverLocation, SolarAngles, SunEvent, TimeOfDay,
    REFRACTED_HORIZON_DEG, SECONDS_PER_DAY,
};
