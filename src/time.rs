//! Calendar and clock plumbing around the solar event pipeline.
//!
//! The pipeline itself only needs a day-of-year number; everything else here
//! turns its fractional-hours output into calendar-aware instants and local
//! times.

use crate::{Error, Result};

#[cfg(feature = "chrono")]
use crate::types::TimeOfDay;
#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDate, Utc};

/// Cumulative days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Checks whether a year is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Computes the ordinal day of the year (1..=366) for a calendar date.
///
/// # Errors
/// Returns `InvalidDate` if the month is outside 1-12 or the day does not
/// exist in that month.
///
/// # Example
/// ```
/// # use solar_events::time::day_of_year;
/// assert_eq!(day_of_year(2008, 11, 1).unwrap(), 306);
/// assert_eq!(day_of_year(2008, 4, 25).unwrap(), 116);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }

    let leap_adjustment = u32::from(month > 2 && is_leap_year(year));
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_adjustment + day)
}

/// Attaches a pipeline time of day to its observation date as a UTC instant.
///
/// The UTC day is the observation day by construction; only the hour value
/// wraps, so no date arithmetic happens here.
#[cfg(feature = "chrono")]
#[must_use]
pub fn utc_datetime(date: NaiveDate, time: TimeOfDay) -> DateTime<Utc> {
    let (hour, minute) = time.hour_minute();
    date.and_hms_opt(hour, minute, 0)
        .expect("hour and minute are wrapped into range")
        .and_utc()
}

/// Converts a UTC instant into an IANA time zone.
///
/// The zone's UTC offset is looked up for the specific instant, so daylight
/// saving transitions are honored; the calendar date shifts with the offset
/// where it has to.
///
/// # Errors
/// Returns `UnknownTimeZone` if the identifier is not in the IANA database.
///
/// # Example
/// ```
/// # use solar_events::time::in_zone;
/// use chrono::{NaiveDate, Utc};
///
/// let utc = NaiveDate::from_ymd_opt(2008, 11, 1)
///     .unwrap()
///     .and_hms_opt(21, 59, 0)
///     .unwrap()
///     .and_utc();
/// let local = in_zone(utc, "America/New_York").unwrap();
/// assert_eq!(local.to_string(), "2008-11-01 17:59:00 EDT");
/// ```
#[cfg(feature = "tz")]
pub fn in_zone(utc: DateTime<Utc>, zone: &str) -> Result<DateTime<chrono_tz::Tz>> {
    Ok(utc.with_timezone(&resolve_zone(zone)?))
}

/// Resolves an IANA identifier against the bundled zone database.
#[cfg(feature = "tz")]
pub(crate) fn resolve_zone(zone: &str) -> Result<chrono_tz::Tz> {
    zone.parse().map_err(|_| Error::unknown_time_zone(zone))
}
