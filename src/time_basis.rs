use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone};

use crate::error::{Error, Result};
use crate::types::{CalendarMoment, TimeOfDay, SECONDS_PER_DAY};

pub const J2000_DAY_NUMBER: f64 = 2_451_545.0;

// chrono days-from-CE to Julian day number
const CE_TO_JULIAN_DAY_NUMBER: i64 = 1_721_425;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let dim = days_in_months(year);
    if !(1..=12).contains(&month) || day == 0 || day > dim[(month - 1) as usize] {
        return Err(Error::InvalidDate(format!("{year:04}-{month:02}-{day:02}")));
    }
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    Ok(sum + day)
}

pub fn month_day(year: i32, day_of_year: u32) -> Result<(u32, u32)> {
    if day_of_year == 0 || day_of_year > days_in_year(year) {
        return Err(Error::InvalidDayOfYear { year, day_of_year });
    }
    let mut remaining = day_of_year;
    for (month_idx, &dim) in days_in_months(year).iter().enumerate() {
        if remaining <= dim {
            return Ok((month_idx as u32 + 1, remaining));
        }
        remaining -= dim;
    }
    Err(Error::InvalidDayOfYear { year, day_of_year })
}

pub fn fraction_of_day(time: TimeOfDay) -> f64 {
    f64::from(time.seconds()) / f64::from(SECONDS_PER_DAY)
}

// radians in [0, 2π); a day_of_year of 0 is read as 1
pub fn fractional_year_angle(moment: &CalendarMoment) -> f64 {
    let days = f64::from(days_in_year(moment.year));
    (TAU / days) * (f64::from(moment.day_of_year.saturating_sub(1)) + fraction_of_day(moment.time))
}

pub fn days_since_j2000(date: NaiveDate, time: TimeOfDay) -> f64 {
    let jdn = i64::from(date.num_days_from_ce()) + CE_TO_JULIAN_DAY_NUMBER;
    jdn as f64 - J2000_DAY_NUMBER + fraction_of_day(time)
}

pub fn local_moment<Tz: TimeZone>(dt: &DateTime<Tz>) -> (CalendarMoment, f64) {
    let offset_seconds = dt.offset().fix().local_minus_utc();
    (
        CalendarMoment::from(dt.naive_local()),
        f64::from(offset_seconds) / 3600.0,
    )
}
