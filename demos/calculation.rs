use chrono::NaiveDate;

use sunpos::{
    fractional_year_angle, solar_position_at, sun_events, CalendarMoment, LocatorConfig,
    ObserverLocation, TimeOfDay,
};

fn main() -> Result<(), sunpos::Error> {
    let location = ObserverLocation::sao_paulo();
    let date = NaiveDate::from_ymd_opt(2021, 12, 21).ok_or(sunpos::Error::InvalidDate(
        "2021-12-21".to_string(),
    ))?;
    let time = TimeOfDay::new(12, 0, 0)?;
    let moment = CalendarMoment::from_date_time(date, time);

    let angles = solar_position_at(&moment, &location);
    let (sunrise, sunset) = sun_events(date, &location, &LocatorConfig::default())?;

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Sao Paulo ({:.4}°S, {:.4}°E, UTC{:+})",
        -location.latitude, location.longitude, location.timezone_offset_hours
    );
    println!("Date/Time: {} {}", date, time);
    println!();
    println!("--- Solar Position ---");
    println!("Day of year: {}", moment.day_of_year);
    println!("Fractional year: {:.4} rad", fractional_year_angle(&moment));
    println!("Zenith Angle: {:.2}°", angles.zenith_deg());
    println!("Elevation: {:.2}°", angles.elevation_deg());
    match angles.azimuth_deg() {
        Some(az) => println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", az),
        None => println!("Azimuth: undefined"),
    }
    println!();
    println!("--- Sun Events ---");
    println!("{}", sunrise);
    println!("{}", sunset);
    Ok(())
}
