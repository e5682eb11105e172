use chrono::{Datelike, NaiveDate, NaiveDateTime};
use fieldmap_core::util::geo_ops;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// parses an integer column value. exported tables may carry whole numbers as
/// floats (`"9.0"`), which are accepted; fractional or non-numeric text is not.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// completed years between a birth date and the reference date
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    let had_birthday = (today.month(), today.day()) >= (birth_date.month(), birth_date.day());
    let years = today.year() - birth_date.year() - if had_birthday { 0 } else { 1 };
    years as i64
}

/// keeps a coordinate pair only when both values are present and in range
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(Option<f64>, Option<f64>), String> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) if !geo_ops::is_valid_coordinate(lat, lon) => {
            Err(format!("coordinate ({lat}, {lon}) is out of range"))
        }
        other => Ok(other),
    }
}
