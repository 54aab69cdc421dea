use std::f64::consts::{PI, TAU};

use crate::time_basis::fractional_year_angle;
use crate::types::{CalendarMoment, ObserverLocation, SolarAngles};

pub const MINUTES_PER_DEGREE: f64 = 4.0;

const AZIMUTH_DEGENERACY_EPSILON: f64 = 1e-12;

pub fn to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

// minutes
pub fn equation_of_time(fy: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * fy.cos()
            - 0.032077 * fy.sin()
            - 0.014615 * (2.0 * fy).cos()
            - 0.040849 * (2.0 * fy).sin())
}

pub fn solar_declination(fy: f64) -> f64 {
    0.006918 - 0.399912 * fy.cos() + 0.070257 * fy.sin()
        - 0.006758 * (2.0 * fy).cos()
        + 0.000907 * (2.0 * fy).sin()
        - 0.002697 * (3.0 * fy).cos()
        + 0.00148 * (3.0 * fy).sin()
}

pub fn time_offset(eqtime: f64, location: &ObserverLocation) -> f64 {
    eqtime + MINUTES_PER_DEGREE * location.longitude - 60.0 * location.timezone_offset_hours
}

pub fn true_solar_time(seconds_of_day: f64, t_offset: f64) -> f64 {
    seconds_of_day / 60.0 + t_offset
}

pub fn hour_angle(tst: f64) -> f64 {
    to_radians(tst / MINUTES_PER_DEGREE - 180.0)
}

pub fn solar_zenith_angle(lat_rad: f64, decl: f64, sha: f64) -> f64 {
    let cos_zenith = lat_rad.sin() * decl.sin() + lat_rad.cos() * decl.cos() * sha.cos();
    cos_zenith.clamp(-1.0, 1.0).acos()
}

// Clockwise from north. None on a pole or with the sun at zenith/nadir.
pub fn solar_azimuth(lat_rad: f64, decl: f64, zenith: f64, sha: f64) -> Option<f64> {
    let denom = lat_rad.cos() * zenith.sin();
    if denom.abs() < AZIMUTH_DEGENERACY_EPSILON {
        return None;
    }
    let cos_arg = ((lat_rad.sin() * zenith.cos()) - decl.sin()) / denom;
    let morning = -(cos_arg.clamp(-1.0, 1.0).acos() - PI);
    // The inverse cosine only covers east of the meridian; mirror for afternoon.
    let sha_norm = (sha + PI).rem_euclid(TAU) - PI;
    if sha_norm > 0.0 {
        Some((TAU - morning).rem_euclid(TAU))
    } else {
        Some(morning)
    }
}

pub fn solar_position(fy: f64, seconds_of_day: f64, location: &ObserverLocation) -> SolarAngles {
    let eqtime = equation_of_time(fy);
    let decl = solar_declination(fy);
    let tst = true_solar_time(seconds_of_day, time_offset(eqtime, location));
    let sha = hour_angle(tst);
    let lat_rad = to_radians(location.latitude);
    let zenith = solar_zenith_angle(lat_rad, decl, sha);
    let azimuth = solar_azimuth(lat_rad, decl, zenith, sha);
    if azimuth.is_none() {
        log::debug!(
            "azimuth undefined at latitude {}° (zenith {:.6} rad)",
            location.latitude,
            zenith
        );
    }
    SolarAngles { zenith, azimuth }
}

pub fn solar_position_at(moment: &CalendarMoment, location: &ObserverLocation) -> SolarAngles {
    solar_position(
        fractional_year_angle(moment),
        f64::from(moment.time.seconds()),
        location,
    )
}

pub fn solar_noon_minutes(fy: f64, location: &ObserverLocation) -> f64 {
    (720.0 - time_offset(equation_of_time(fy), location)).rem_euclid(1440.0)
}
