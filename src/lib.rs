//! # Solar Events Library
//!
//! Sunrise, sunset and twilight times from the classic "Almanac for
//! Computers" algorithm.
//!
#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes the clock time at which the sun crosses one of the
//! four standard elevation thresholds for a calendar date and a geographic
//! coordinate:
//! - **Official** sunrise/sunset (zenith 90.8333°)
//! - **Civil** twilight (96°)
//! - **Nautical** twilight (102°)
//! - **Astronomical** twilight (108°)
//!
//! Results are produced in UTC and can be converted into any IANA time zone
//! with daylight-saving handled at the specific instant. At polar latitudes
//! the sun may stay on one side of a threshold for the whole day; that is a
//! normal outcome, reported through the [`SolarEvent`] sum type rather than
//! as an error.
//!
//! ## Features
//!
//! - `std` (default): native math functions
//! - `chrono` (default): `NaiveDate`/`DateTime` based convenience API
//! - `tz` (default): IANA zone conversion via `chrono-tz`
//! - `libm`: pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + tz (most convenient)
//! solar-events = "0.1"
//!
//! # Minimal std (numeric API only)
//! solar-events = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunset with chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use solar_events::{SolarDay, Zenith};
//!
//! let day = SolarDay::new(
//!     NaiveDate::from_ymd_opt(2008, 11, 1).unwrap(),
//!     39.9537,   // latitude
//!     -75.7850,  // longitude
//! ).unwrap();
//!
//! match day.sunset(Zenith::Official) {
//!     solar_events::SolarEvent::Occurs(utc) => println!("sunset {utc}"),
//!     solar_events::SolarEvent::AllDay => println!("sun stays up"),
//!     solar_events::SolarEvent::AllNight => println!("sun stays down"),
//! }
//! # }
//! ```
//!
//! ### Local time in an IANA zone
//! ```rust
//! # #[cfg(feature = "tz")] {
//! use chrono::NaiveDate;
//! use solar_events::{SolarDay, Zenith};
//!
//! let day = SolarDay::new(
//!     NaiveDate::from_ymd_opt(2008, 11, 1).unwrap(),
//!     39.9537,
//!     -75.7850,
//! ).unwrap();
//!
//! let sunset = day.sunset_in_zone(Zenith::Official, "America/New_York").unwrap();
//! let local = sunset.time().unwrap();
//! assert_eq!(local.format("%H:%M %Z").to_string(), "17:59 EDT");
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_events::{almanac, Zenith};
//!
//! let sunset = almanac::sunset_utc(2008, 11, 1, 39.9537, -75.7850, Zenith::Official).unwrap();
//! assert_eq!(sunset.time().unwrap().hour_minute(), (21, 59));
//! ```
//!
//! ## Accuracy
//!
//! The algorithm is a closed-form approximation with clock-minute resolution;
//! it does not model atmospheric refraction beyond the fixed zenith constants
//! and carries no sub-second precision. Intermediate values are rounded
//! half-up to four decimal places after every stage, the discipline the
//! published worked examples use, which keeps results reproducible across
//! platforms.
//!
//! ## Reference
//!
//! Almanac for Computers (1990), Nautical Almanac Office, United States Naval
//! Observatory.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::float_cmp, // Exact comparisons of stage fixture values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{Direction, SolarEvent, TimeOfDay, Zenith};

#[cfg(feature = "chrono")]
pub use crate::day::SolarDay;

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(feature = "chrono")]
mod day;
