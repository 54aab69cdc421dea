use std::error::Error;
use std::io;

use chrono::NaiveDate;
use clap::Parser;
use sunpos::{
    days_since_j2000, fractional_year_angle, normalize_angle, parse_date, parse_time,
    prompt_until_valid, solar_position_at, sun_events, CalendarMoment, LocatorConfig,
    ObserverLocation, TimeOfDay,
};

#[derive(Parser)]
#[command(name = "sunpos", about = "Sun zenith/azimuth and sunrise/sunset for a place and time")]
struct Cli {
    /// Date as dd-mm-yyyy (asked for interactively when omitted)
    #[arg(long)]
    date: Option<String>,
    /// Local time as hh:mm:ss (asked for interactively when omitted)
    #[arg(long)]
    time: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = ObserverLocation::greenwich().latitude, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive unless --west is given
    #[arg(long, default_value_t = ObserverLocation::greenwich().longitude, allow_negative_numbers = true)]
    lon: f64,
    /// Treat --lon as positive west of Greenwich
    #[arg(long)]
    west: bool,
    /// Fixed UTC offset of the local clock in hours
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tz: f64,
    /// Zenith angle in degrees that counts as sunrise/sunset
    #[arg(long, default_value_t = LocatorConfig::default().threshold_deg)]
    threshold: f64,
    /// Largest accepted distance from the threshold in degrees
    #[arg(long, default_value_t = LocatorConfig::default().tolerance_deg)]
    tolerance: f64,
    /// Hours scanned after each search start
    #[arg(long, default_value_t = LocatorConfig::default().window_hours)]
    window: u32,
}

fn read_date(arg: Option<&str>) -> Result<NaiveDate, Box<dyn Error>> {
    if let Some(text) = arg {
        return Ok(parse_date(text)?);
    }
    let stdin = io::stdin();
    Ok(prompt_until_valid(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Enter date in format dd-mm-yyyy",
        "Invalid date!",
        parse_date,
    )?)
}

fn read_time(arg: Option<&str>) -> Result<TimeOfDay, Box<dyn Error>> {
    if let Some(text) = arg {
        return Ok(parse_time(text)?);
    }
    let stdin = io::stdin();
    Ok(prompt_until_valid(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Enter time in format hh:mm:ss",
        "Invalid time!",
        parse_time,
    )?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let location = if cli.west {
        ObserverLocation::from_west_longitude(cli.lat, cli.lon, cli.tz)?
    } else {
        ObserverLocation::new(cli.lat, cli.lon, cli.tz)?
    };
    let config = LocatorConfig {
        window_hours: cli.window,
        threshold_deg: cli.threshold,
        tolerance_deg: cli.tolerance,
        ..LocatorConfig::default()
    };
    config.validate()?;

    let date = read_date(cli.date.as_deref())?;
    let time = read_time(cli.time.as_deref())?;
    let moment = CalendarMoment::from_date_time(date, time);

    let angles = solar_position_at(&moment, &location);
    let (sunrise, sunset) = sun_events(date, &location, &config)?;

    println!(
        "Location: {:.4}°, {:.4}°E (UTC{:+})",
        location.latitude, location.longitude, location.timezone_offset_hours
    );
    println!("Date/Time: {date} {time}");
    println!("Day of year: {}", moment.day_of_year);
    println!("Days since J2000: {:.6}", days_since_j2000(date, time));
    println!("Fractional year: {:.6} rad", fractional_year_angle(&moment));
    println!("Zenith: {:.4}°", angles.zenith_deg());
    match angles.azimuth_deg() {
        Some(az) => println!("Azimuth: {:.4}°", normalize_angle(az)),
        None => println!("Azimuth: undefined"),
    }
    println!("{sunrise}");
    println!("{sunset}");
    Ok(())
}
