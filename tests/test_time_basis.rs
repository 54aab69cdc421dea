use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::America::Sao_Paulo;

use sunpos::time_basis::*;
use sunpos::types::{CalendarMoment, TimeOfDay};
use sunpos::Error;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn moment(year: i32, doy: u32, h: u32, m: u32, s: u32) -> CalendarMoment {
    CalendarMoment::new(year, doy, TimeOfDay::new(h, m, s).unwrap()).unwrap()
}

// ── Leap years ──

#[test]
fn test_leap_year_gregorian_rule() {
    assert!(leap_year(2000));
    assert!(!leap_year(1900));
    assert!(leap_year(2024));
    assert!(!leap_year(2023));
    assert!(!leap_year(2100));
    assert!(leap_year(2400));
}

#[test]
fn test_days_in_year() {
    assert_eq!(days_in_year(2021), 365);
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(1900), 365);
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1).unwrap(), 1);
    assert_eq!(day_of_year(2026, 3, 21).unwrap(), 80);
    assert_eq!(day_of_year(2021, 12, 31).unwrap(), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(2024, 2, 29).unwrap(), 60);
    assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
    assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
}

#[test]
fn test_day_of_year_rejects_invalid_dates() {
    assert!(matches!(day_of_year(2023, 2, 29), Err(Error::InvalidDate(_))));
    assert!(day_of_year(1900, 2, 29).is_err());
    assert!(day_of_year(2024, 13, 1).is_err());
    assert!(day_of_year(2024, 0, 1).is_err());
    assert!(day_of_year(2024, 4, 31).is_err());
    assert!(day_of_year(2024, 4, 0).is_err());
}

#[test]
fn test_day_of_year_matches_chrono() {
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while date.year() == 2024 {
        assert_eq!(
            day_of_year(2024, date.month(), date.day()).unwrap(),
            date.ordinal()
        );
        assert_eq!(month_day(2024, date.ordinal()).unwrap(), (date.month(), date.day()));
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_month_day() {
    assert_eq!(month_day(2021, 1).unwrap(), (1, 1));
    assert_eq!(month_day(2021, 60).unwrap(), (3, 1));
    assert_eq!(month_day(2024, 60).unwrap(), (2, 29));
    assert_eq!(month_day(2021, 365).unwrap(), (12, 31));
    assert_eq!(
        month_day(2021, 366),
        Err(Error::InvalidDayOfYear {
            year: 2021,
            day_of_year: 366
        })
    );
    assert!(month_day(2021, 0).is_err());
}

// ── CalendarMoment ──

#[test]
fn test_calendar_moment_day_of_year_bounds() {
    let t = TimeOfDay::default();
    assert!(CalendarMoment::new(2024, 366, t).is_ok());
    assert!(CalendarMoment::new(2023, 366, t).is_err());
    assert!(CalendarMoment::new(2023, 0, t).is_err());
}

#[test]
fn test_time_of_day_bounds() {
    assert!(TimeOfDay::new(23, 59, 59).is_ok());
    assert!(TimeOfDay::new(24, 0, 0).is_err());
    assert!(TimeOfDay::new(12, 60, 0).is_err());
    assert!(TimeOfDay::new(12, 0, 60).is_err());
    assert_eq!(TimeOfDay::new(7, 5, 3).unwrap().to_string(), "07:05:03");
}

// ── Fractional year ──

#[test]
fn test_fraction_of_day() {
    assert_approx!(fraction_of_day(TimeOfDay::default()), 0.0, 1e-12);
    assert_approx!(fraction_of_day(TimeOfDay::new(12, 0, 0).unwrap()), 0.5, 1e-12);
    assert_approx!(
        fraction_of_day(TimeOfDay::new(23, 59, 59).unwrap()),
        86399.0 / 86400.0,
        1e-12
    );
}

#[test]
fn test_fractional_year_new_year_midnight_is_zero() {
    assert_approx!(fractional_year_angle(&moment(2021, 1, 0, 0, 0)), 0.0, 1e-12);
}

#[test]
fn test_fractional_year_day_zero_literal_does_not_overflow() {
    let m = CalendarMoment {
        year: 2021,
        day_of_year: 0,
        time: TimeOfDay::default(),
    };
    assert_approx!(fractional_year_angle(&m), 0.0, 1e-12);
}

#[test]
fn test_fractional_year_end_of_non_leap_year() {
    let fy = fractional_year_angle(&moment(2021, 365, 23, 59, 59));
    let expected = (TAU / 365.0) * (364.0 + 86399.0 / 86400.0);
    assert_approx!(fy, expected, 1e-12);
    assert!(fy < TAU);
    assert_approx!(fy, TAU, 1e-4);
}

#[test]
fn test_fractional_year_uses_366_in_leap_years() {
    let fy = fractional_year_angle(&moment(2024, 61, 0, 0, 0));
    assert_approx!(fy, TAU * 60.0 / 366.0, 1e-12);
    let last = fractional_year_angle(&moment(2024, 366, 23, 59, 59));
    assert!(last < TAU);
    assert_approx!(last, TAU, 1e-4);
}

#[test]
fn test_fractional_year_monotonic_within_year() {
    let mut prev = -1.0;
    for doy in 1..=365 {
        for hour in [0, 6, 12, 18, 23] {
            let fy = fractional_year_angle(&moment(2023, doy, hour, 30, 0));
            assert!(fy > prev, "doy={} hour={}", doy, hour);
            assert!((0.0..TAU).contains(&fy));
            prev = fy;
        }
    }
}

// ── J2000 day count ──

#[test]
fn test_days_since_j2000() {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    assert_approx!(days_since_j2000(epoch, TimeOfDay::default()), 0.0, 1e-12);

    let date = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
    let noon = TimeOfDay::new(12, 0, 0).unwrap();
    assert_approx!(days_since_j2000(date, noon), 8035.5, 1e-9);

    let eve = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    let six_pm = TimeOfDay::new(18, 0, 0).unwrap();
    assert_approx!(days_since_j2000(eve, six_pm), -0.25, 1e-12);
}

// ── Zoned conversion ──

#[test]
fn test_local_moment_from_zoned_datetime() {
    let dt = Sao_Paulo.with_ymd_and_hms(2021, 12, 21, 5, 17, 0).unwrap();
    let (m, offset) = local_moment(&dt);
    assert_eq!(m.year, 2021);
    assert_eq!(m.day_of_year, 355);
    assert_eq!(m.time, TimeOfDay::new(5, 17, 0).unwrap());
    assert_approx!(offset, -3.0, 1e-12);
}

#[test]
fn test_calendar_moment_from_naive_datetime() {
    let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let m = CalendarMoment::from(dt);
    assert_eq!(m.day_of_year, 366);
    assert_eq!(m.date(), Some(dt.date()));
}
