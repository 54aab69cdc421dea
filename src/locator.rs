use chrono::NaiveDate;

use crate::angles::{solar_position_at, to_degrees};
use crate::error::Result;
use crate::types::{
    check_tolerance, check_window, CalendarMoment, EventKind, LocatorConfig, ObserverLocation,
    SunEvent, TimeOfDay,
};

pub fn seconds_to_time(total_seconds: u32) -> (u32, u32, u32) {
    (
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
    )
}

// Assumes the zenith crosses the threshold monotonically inside the window.
pub fn find_event(
    kind: EventKind,
    date: NaiveDate,
    location: &ObserverLocation,
    search_start: TimeOfDay,
    window_hours: u32,
    threshold_deg: f64,
    tolerance_deg: f64,
) -> Result<SunEvent> {
    check_window(search_start, window_hours)?;
    check_tolerance(tolerance_deg)?;

    let start = search_start.seconds();
    let mut best_diff = f64::INFINITY;
    let mut best: Option<(TimeOfDay, f64)> = None;

    for step in 0..window_hours * 60 {
        let (hour, minute, second) = seconds_to_time(start + step * 60);
        let time = TimeOfDay {
            hour,
            minute,
            second,
        };
        let moment = CalendarMoment::from_date_time(date, time);
        let zenith = to_degrees(solar_position_at(&moment, location).zenith);
        let diff = (threshold_deg - zenith).abs();
        log::trace!("{kind} scan {time}: zenith {zenith:.4}°, diff {diff:.4}°");
        if diff < best_diff && diff < tolerance_deg {
            best_diff = diff;
            best = Some((time, diff));
        }
    }

    match best {
        Some((time, diff)) => log::debug!("{kind} on {date} at {time} (off by {diff:.4}°)"),
        None => log::debug!("{kind} on {date}: no minute within {tolerance_deg}° of {threshold_deg}°"),
    }

    Ok(SunEvent {
        kind,
        time: best.map(|(t, _)| t),
        diff: best.map(|(_, d)| d),
    })
}

fn find_with_config(
    kind: EventKind,
    date: NaiveDate,
    location: &ObserverLocation,
    config: &LocatorConfig,
) -> Result<SunEvent> {
    find_event(
        kind,
        date,
        location,
        config.start_for(kind),
        config.window_hours,
        config.threshold_deg,
        config.tolerance_deg,
    )
}

pub fn find_sunrise(
    date: NaiveDate,
    location: &ObserverLocation,
    config: &LocatorConfig,
) -> Result<SunEvent> {
    find_with_config(EventKind::Sunrise, date, location, config)
}

pub fn find_sunset(
    date: NaiveDate,
    location: &ObserverLocation,
    config: &LocatorConfig,
) -> Result<SunEvent> {
    find_with_config(EventKind::Sunset, date, location, config)
}

pub fn sun_events(
    date: NaiveDate,
    location: &ObserverLocation,
    config: &LocatorConfig,
) -> Result<(SunEvent, SunEvent)> {
    config.validate()?;
    Ok((
        find_sunrise(date, location, config)?,
        find_sunset(date, location, config)?,
    ))
}
