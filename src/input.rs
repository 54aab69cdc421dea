use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::TimeOfDay;

// short years land in the 2000s: "24" -> 2024, "7" -> 2007
fn pad_year(year: &str) -> String {
    match year.len() {
        1 => format!("200{year}"),
        2 => format!("20{year}"),
        _ => year.to_string(),
    }
}

fn all_digits(field: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(input.to_string());
    let trimmed = input.trim();
    let fields: Vec<&str> = trimmed.split('-').collect();
    let [day, month, year] = fields.as_slice() else {
        return Err(invalid());
    };
    if !all_digits(day, 1, 2) || !all_digits(month, 1, 2) || !all_digits(year, 1, 4) {
        return Err(invalid());
    }
    let year: i32 = pad_year(year).parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    let invalid = || Error::InvalidTime(input.to_string());
    let trimmed = input.trim();
    let fields: Vec<&str> = trimmed.split(':').collect();
    let [hour, minute, second] = fields.as_slice() else {
        return Err(invalid());
    };
    if !all_digits(hour, 1, 2) || !all_digits(minute, 2, 2) || !all_digits(second, 2, 2) {
        return Err(invalid());
    }
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    let second: u32 = second.parse().map_err(|_| invalid())?;
    TimeOfDay::new(hour, minute, second).map_err(|_| invalid())
}

pub fn red(text: &str) -> String {
    format!("\x1b[31m{text}\x1b[0m")
}

pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    complaint: &str,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    let mut line = String::new();
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }
        match parse(line.trim_end_matches(['\r', '\n'])) {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("rejected input: {err}");
                writeln!(output, "{}", red(complaint))?;
            }
        }
    }
}
