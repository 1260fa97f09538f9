//! Core data types for solar event calculations.

use crate::math::floor;

/// Predefined zenith angles at which the standard solar events occur.
///
/// The zenith angle is the sun's angular distance from the point directly
/// overhead; larger angles put the sun further below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zenith {
    /// Standard sunrise/sunset (sun's upper limb at the horizon, with the
    /// conventional allowance for refraction and solar radius)
    Official,
    /// Civil twilight boundary (sun 6° below the horizon)
    Civil,
    /// Nautical twilight boundary (sun 12° below the horizon)
    Nautical,
    /// Astronomical twilight boundary (sun 18° below the horizon)
    Astronomical,
}

impl Zenith {
    /// Gets the zenith angle in degrees for this event definition.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => 90.8333,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }
}

/// Whether the sun is crossing the threshold on its way up or down.
///
/// The direction affects two branch points in the pipeline: the first-guess
/// time offset (06:00 vs 18:00 solar time) and which arc of the hour-angle
/// circle the event lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The sun rises through the threshold.
    Sunrise,
    /// The sun sets through the threshold.
    Sunset,
}

/// Outcome of a solar event calculation for one day at one site.
///
/// At polar latitudes the sun can stay on one side of a threshold for the
/// whole day, so non-occurrence is a normal outcome, distinct from any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent<T> {
    /// The sun crosses the threshold at the contained time.
    Occurs(T),
    /// The sun stays above the threshold all day, so the event never happens
    /// (midnight sun, relative to this threshold).
    AllDay,
    /// The sun stays below the threshold all day, so the event never happens
    /// (polar night, relative to this threshold).
    AllNight,
}

impl<T> SolarEvent<T> {
    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks whether the event occurs on this day.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks whether the sun remains above the threshold all day.
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks whether the sun remains below the threshold all day.
    pub const fn is_all_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Maps the contained event time, preserving non-occurrence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SolarEvent<U> {
        match self {
            Self::Occurs(time) => SolarEvent::Occurs(f(time)),
            Self::AllDay => SolarEvent::AllDay,
            Self::AllNight => SolarEvent::AllNight,
        }
    }
}

/// A UTC time of day as fractional hours in [0, 24).
///
/// This is the raw pipeline output before it is attached to a calendar date.
/// Results carry minute resolution: the algorithm's published worked example
/// truncates the fractional minutes rather than rounding them, and its times
/// are only reproduced under that convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Wraps a fractional-hours value; callers guarantee [0, 24).
    pub(crate) const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the fractional hours since midnight UTC.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the (hour, minute) clock reading, truncated to the minute.
    ///
    /// # Example
    /// ```
    /// # use solar_events::TimeOfDay;
    /// let sunset = TimeOfDay::from_hours_clamped(21.9984);
    /// assert_eq!(sunset.hour_minute(), (21, 59));
    /// ```
    #[must_use]
    pub fn hour_minute(&self) -> (u32, u32) {
        let hour = floor(self.0);
        // Stage values are quantized to 4 decimals, so the minutes product is
        // a clean multiple of 0.006; re-rounding shields the truncation from
        // binary representation drift.
        let minute = floor(crate::math::round4((self.0 - hour) * 60.0));
        (hour as u32, minute as u32)
    }

    /// Builds a time of day from fractional hours, wrapping into [0, 24).
    #[must_use]
    pub fn from_hours_clamped(hours: f64) -> Self {
        Self(crate::math::normalize_hours_0_to_24(hours))
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (hour, minute) = self.hour_minute();
        write!(f, "{hour:02}:{minute:02}")
    }
}
