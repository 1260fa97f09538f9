//! Sunrise/sunset algorithm from the "Almanac for Computers".
//!
//! Closed-form spherical astronomy: a fixed sequence of trigonometric
//! transformations maps (day of year, latitude, longitude, zenith, direction)
//! to a UTC time of day, or detects that the sun never crosses the requested
//! threshold on that day (polar day/night).
//!
//! Reference: Almanac for Computers (1990), Nautical Almanac Office,
//! United States Naval Observatory, as popularized by Ed Williams'
//! Aviation Formulary.
//!
//! Accuracy is on the order of a minute or two of clock time, which is all
//! the closed-form approximation supports. Every stage output is rounded
//! half-up to 4 decimal places before the next stage consumes it; changing
//! that discipline changes the last digits of the results.

#![allow(clippy::unreadable_literal)]

use crate::error::check_coordinates;
use crate::math::{
    acos_deg, asin_deg, atan_deg, cos_deg, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, round4, sin_deg, tan_deg,
};
use crate::time::day_of_year;
use crate::types::{Direction, SolarEvent, TimeOfDay, Zenith};
use crate::Result;

/// Longitude degrees per hour of solar time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculates the UTC time of a solar event.
///
/// This is the numeric entry point: no calendar types, just validated date
/// components and coordinates. The chrono-based [`crate::SolarDay`] API wraps
/// it.
///
/// # Arguments
/// * `year` - Calendar year
/// * `month` - Month (1-12)
/// * `day` - Day of month
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `zenith` - Threshold the sun crosses at the event
/// * `direction` - Whether the sun is rising or setting
///
/// # Returns
/// The event outcome: a UTC [`TimeOfDay`], or the polar condition that keeps
/// the event from occurring.
///
/// # Errors
/// Returns an error for invalid coordinates or date components. Polar
/// non-occurrence is *not* an error.
///
/// # Example
/// ```
/// use solar_events::{almanac, Direction, Zenith};
///
/// let event = almanac::event_utc(
///     2008, 11, 1,
///     39.9537,  // Chester County, Pennsylvania
///     -75.7850,
///     Zenith::Official,
///     Direction::Sunset,
/// ).unwrap();
///
/// assert_eq!(event.time().unwrap().hour_minute(), (21, 59));
/// ```
pub fn event_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    direction: Direction,
) -> Result<SolarEvent<TimeOfDay>> {
    check_coordinates(latitude, longitude)?;
    let n = day_of_year(year, month, day)?;
    Ok(compute_event(n, latitude, longitude, zenith, direction))
}

/// Calculates the UTC sunrise time for the given date and site.
///
/// # Errors
/// Returns an error for invalid coordinates or date components.
pub fn sunrise_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SolarEvent<TimeOfDay>> {
    event_utc(year, month, day, latitude, longitude, zenith, Direction::Sunrise)
}

/// Calculates the UTC sunset time for the given date and site.
///
/// # Errors
/// Returns an error for invalid coordinates or date components.
pub fn sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SolarEvent<TimeOfDay>> {
    event_utc(year, month, day, latitude, longitude, zenith, Direction::Sunset)
}

/// Runs the pipeline for pre-validated inputs.
pub(crate) fn compute_event(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    direction: Direction,
) -> SolarEvent<TimeOfDay> {
    let lng_hour = longitude_hour(longitude);
    let t = approximate_time(day_of_year, lng_hour, direction);
    let anomaly = mean_anomaly(t);
    let l = true_longitude(anomaly);
    let ra_hours = right_ascension_hours(l);
    let (sin_dec, cos_dec) = declination(l);
    let cos_h = hour_angle_cosine(sin_dec, cos_dec, latitude, zenith);

    match polar_condition(cos_h) {
        Some(PolarCondition::AllDay) => return SolarEvent::AllDay,
        Some(PolarCondition::AllNight) => return SolarEvent::AllNight,
        None => {}
    }

    let h = local_hour_angle_hours(cos_h, direction);
    let mean_time = local_mean_time(h, ra_hours, t);
    SolarEvent::Occurs(TimeOfDay::from_hours(utc_hours(mean_time, lng_hour)))
}

/// Stage 1: hours of solar time the site's longitude is offset from Greenwich.
fn longitude_hour(longitude: f64) -> f64 {
    round4(longitude / DEGREES_PER_HOUR)
}

/// Stage 2: first-guess event time as a fractional day of year.
///
/// Sunrise starts from 06:00 local solar time, sunset from 18:00; the guess
/// is refined by the later stages.
fn approximate_time(day_of_year: u32, longitude_hour: f64, direction: Direction) -> f64 {
    let base = match direction {
        Direction::Sunrise => 6.0,
        Direction::Sunset => 18.0,
    };
    round4(f64::from(day_of_year) + (base - longitude_hour) / 24.0)
}

/// Stage 3: the sun's mean anomaly in degrees (deliberately not normalized).
fn mean_anomaly(approximate_time: f64) -> f64 {
    round4(0.9856 * approximate_time - 3.289)
}

/// Stage 4: ecliptic longitude of the sun, corrected for orbital
/// eccentricity and normalized to [0, 360).
fn true_longitude(mean_anomaly: f64) -> f64 {
    let l = mean_anomaly
        + 1.916 * sin_deg(mean_anomaly)
        + 0.020 * sin_deg(2.0 * mean_anomaly)
        + 282.634;
    round4(normalize_degrees_0_to_360(l))
}

/// Stages 5-7: right ascension of the sun, in hours.
///
/// The raw arctangent is ambiguous by half-turns, so the result is pushed
/// into the same 90° quadrant as the true longitude before converting to
/// hours. The quadrant comparison uses the rounded value; an unrounded value
/// an ulp below a 90° boundary would land in the wrong quadrant.
fn right_ascension_hours(true_longitude: f64) -> f64 {
    let raw = round4(normalize_degrees_0_to_360(atan_deg(
        0.91764 * tan_deg(true_longitude),
    )));

    let l_quadrant = 90.0 * floor(true_longitude / 90.0);
    let ra_quadrant = 90.0 * floor(raw / 90.0);
    let corrected = raw + (l_quadrant - ra_quadrant);

    round4(corrected / DEGREES_PER_HOUR)
}

/// Stage 8: sine and cosine of the sun's declination.
///
/// The cosine is non-negative by construction because the declination stays
/// inside (-90°, 90°).
fn declination(true_longitude: f64) -> (f64, f64) {
    let sin_dec = round4(0.39782 * sin_deg(true_longitude));
    let cos_dec = round4(cos_deg(asin_deg(sin_dec)));
    (sin_dec, cos_dec)
}

/// Stage 9: cosine of the sun's local hour angle at the event threshold.
fn hour_angle_cosine(sin_dec: f64, cos_dec: f64, latitude: f64, zenith: Zenith) -> f64 {
    let numerator = cos_deg(zenith.degrees()) - sin_dec * sin_deg(latitude);
    round4(numerator / (cos_dec * cos_deg(latitude)))
}

/// Polar outcome detected by the stage-9 existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolarCondition {
    AllDay,
    AllNight,
}

/// The stage-9 existence check.
///
/// A cosine above 1 means the sun never climbs to the threshold; below -1 it
/// never descends to it. Exactly ±1 is inclusive: the sun grazes the
/// threshold at one instant and the event occurs.
fn polar_condition(cos_hour_angle: f64) -> Option<PolarCondition> {
    if cos_hour_angle > 1.0 {
        Some(PolarCondition::AllNight)
    } else if cos_hour_angle < -1.0 {
        Some(PolarCondition::AllDay)
    } else {
        None
    }
}

/// Stage 10: local hour angle converted to hours.
///
/// Sunset lies on the setting arc (`acos` directly); sunrise is its mirror
/// on the rising arc (`360° - acos`).
fn local_hour_angle_hours(cos_hour_angle: f64, direction: Direction) -> f64 {
    let degrees = match direction {
        Direction::Sunrise => 360.0 - acos_deg(cos_hour_angle),
        Direction::Sunset => acos_deg(cos_hour_angle),
    };
    round4(degrees / DEGREES_PER_HOUR)
}

/// Stage 11: local mean time of the event, wrapped into [0, 24).
fn local_mean_time(hour_angle_hours: f64, ra_hours: f64, approximate_time: f64) -> f64 {
    let t = hour_angle_hours + ra_hours - 0.06571 * approximate_time - 6.622;
    round4(normalize_hours_0_to_24(t))
}

/// Stage 12: convert local mean time to UTC, wrapped into [0, 24).
fn utc_hours(local_mean_time: f64, longitude_hour: f64) -> f64 {
    round4(normalize_hours_0_to_24(local_mean_time - longitude_hour))
}
