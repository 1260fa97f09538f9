//! Calendar-aware engine over the almanac pipeline.

use crate::almanac;
use crate::error::check_coordinates;
use crate::time::utc_datetime;
use crate::types::{Direction, SolarEvent, Zenith};
use crate::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// One observation site on one calendar day.
///
/// Holds the immutable inputs of the pipeline: a date and a validated
/// latitude/longitude pair. Every operation is a fresh deterministic
/// evaluation from these fields, so a `SolarDay` can be shared freely between
/// threads.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_events::{SolarDay, Zenith};
///
/// let day = SolarDay::new(
///     NaiveDate::from_ymd_opt(2008, 11, 1).unwrap(),
///     39.9537,
///     -75.7850,
/// ).unwrap();
///
/// let sunset = day.sunset(Zenith::Official);
/// assert_eq!(sunset.time().unwrap().format("%H:%M").to_string(), "21:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
}

impl SolarDay {
    /// Creates a solar day for a date and site.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates; this is the only failure point of the UTC operations.
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            date,
            latitude,
            longitude,
        })
    }

    /// Gets the observation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the site latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the site longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Calculates the UTC instant the sun rises through the given threshold.
    #[must_use]
    pub fn sunrise(&self, zenith: Zenith) -> SolarEvent<DateTime<Utc>> {
        self.event(zenith, Direction::Sunrise)
    }

    /// Calculates the UTC instant the sun sets through the given threshold.
    #[must_use]
    pub fn sunset(&self, zenith: Zenith) -> SolarEvent<DateTime<Utc>> {
        self.event(zenith, Direction::Sunset)
    }

    /// Official sunrise (zenith 90.8333°).
    #[must_use]
    pub fn official_sunrise(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunrise(Zenith::Official)
    }

    /// Official sunset (zenith 90.8333°).
    #[must_use]
    pub fn official_sunset(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunset(Zenith::Official)
    }

    /// Civil dawn (zenith 96°).
    #[must_use]
    pub fn civil_sunrise(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunrise(Zenith::Civil)
    }

    /// Civil dusk (zenith 96°).
    #[must_use]
    pub fn civil_sunset(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunset(Zenith::Civil)
    }

    /// Nautical dawn (zenith 102°).
    #[must_use]
    pub fn nautical_sunrise(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunrise(Zenith::Nautical)
    }

    /// Nautical dusk (zenith 102°).
    #[must_use]
    pub fn nautical_sunset(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunset(Zenith::Nautical)
    }

    /// Astronomical dawn (zenith 108°).
    #[must_use]
    pub fn astronomical_sunrise(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunrise(Zenith::Astronomical)
    }

    /// Astronomical dusk (zenith 108°).
    #[must_use]
    pub fn astronomical_sunset(&self) -> SolarEvent<DateTime<Utc>> {
        self.sunset(Zenith::Astronomical)
    }

    /// Calculates a sunrise converted into an IANA time zone.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` if the identifier is not recognized.
    #[cfg(feature = "tz")]
    pub fn sunrise_in_zone(
        &self,
        zenith: Zenith,
        zone: &str,
    ) -> Result<SolarEvent<DateTime<chrono_tz::Tz>>> {
        self.event_in_zone(zenith, Direction::Sunrise, zone)
    }

    /// Calculates a sunset converted into an IANA time zone.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` if the identifier is not recognized.
    #[cfg(feature = "tz")]
    pub fn sunset_in_zone(
        &self,
        zenith: Zenith,
        zone: &str,
    ) -> Result<SolarEvent<DateTime<chrono_tz::Tz>>> {
        self.event_in_zone(zenith, Direction::Sunset, zone)
    }

    fn event(&self, zenith: Zenith, direction: Direction) -> SolarEvent<DateTime<Utc>> {
        almanac::compute_event(
            self.date.ordinal(),
            self.latitude,
            self.longitude,
            zenith,
            direction,
        )
        .map(|time| utc_datetime(self.date, time))
    }

    #[cfg(feature = "tz")]
    fn event_in_zone(
        &self,
        zenith: Zenith,
        direction: Direction,
        zone: &str,
    ) -> Result<SolarEvent<DateTime<chrono_tz::Tz>>> {
        // Resolve the zone before computing so an unknown identifier fails
        // even on polar days
        let tz = crate::time::resolve_zone(zone)?;
        Ok(self.event(zenith, direction).map(|utc| utc.with_timezone(&tz)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_day() -> SolarDay {
        SolarDay::new(
            NaiveDate::from_ymd_opt(2008, 11, 1).unwrap(),
            39.9537,
            -75.7850,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_validates_coordinates() {
        let date = NaiveDate::from_ymd_opt(2008, 11, 1).unwrap();
        assert!(SolarDay::new(date, 90.0001, 0.0).is_err());
        assert!(SolarDay::new(date, -90.0001, 0.0).is_err());
        assert!(SolarDay::new(date, 0.0, 180.0001).is_err());
        assert!(SolarDay::new(date, 0.0, -180.0001).is_err());
        assert!(SolarDay::new(date, 90.0, -180.0).is_ok());
    }

    #[test]
    fn test_accessors() {
        let day = reference_day();
        assert_eq!(day.date(), NaiveDate::from_ymd_opt(2008, 11, 1).unwrap());
        assert_eq!(day.latitude(), 39.9537);
        assert_eq!(day.longitude(), -75.7850);
    }

    #[test]
    fn test_event_date_matches_observation_date() {
        let day = reference_day();
        let sunset = day.official_sunset();
        assert_eq!(sunset.time().unwrap().date_naive(), day.date());
    }

    #[test]
    fn test_named_entry_points_match_generic_ones() {
        let day = reference_day();
        assert_eq!(day.official_sunrise(), day.sunrise(Zenith::Official));
        assert_eq!(day.civil_sunrise(), day.sunrise(Zenith::Civil));
        assert_eq!(day.nautical_sunset(), day.sunset(Zenith::Nautical));
        assert_eq!(day.astronomical_sunset(), day.sunset(Zenith::Astronomical));
    }

    #[test]
    #[cfg(feature = "tz")]
    fn test_unknown_zone_is_reported_even_for_polar_days() {
        // Nautical dusk never happens here, but the bad zone must still fail
        let arctic = SolarDay::new(
            NaiveDate::from_ymd_opt(2008, 4, 25).unwrap(),
            64.8378,
            -147.7164,
        )
        .unwrap();
        assert!(arctic.sunset_in_zone(Zenith::Nautical, "Narnia/Lantern").is_err());
    }
}
