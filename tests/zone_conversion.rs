//! Zone conversion against the IANA database, including DST and date
//! rollover behavior.

use chrono::{NaiveDate, Offset, Timelike, Utc};
use solar_events::{Error, SolarDay, Zenith, time};

fn chester_county() -> SolarDay {
    SolarDay::new(
        NaiveDate::from_ymd_opt(2008, 11, 1).unwrap(),
        39.9537,
        -75.7850,
    )
    .unwrap()
}

#[test]
fn test_new_york_sunset_reference_times() {
    // 2008-11-01 is the last full day of daylight saving: UTC-4
    let day = chester_county();

    let cases = [
        (Zenith::Official, (17, 59)),
        (Zenith::Civil, (18, 28)),
        (Zenith::Nautical, (19, 0)),
        (Zenith::Astronomical, (19, 31)),
    ];

    for (zenith, (hour, minute)) in cases {
        let local = day.sunset_in_zone(zenith, "America/New_York").unwrap();
        let local = local.time().copied().expect("sunset occurs");
        assert_eq!((local.hour(), local.minute()), (hour, minute), "{zenith:?}");
        assert_eq!(local.offset().fix().local_minus_utc(), -4 * 3600);
        assert_eq!(local.date_naive(), day.date());
    }
}

#[test]
fn test_zone_round_trip_preserves_the_instant() {
    let day = chester_county();

    let utc = *day.sunset(Zenith::Official).time().unwrap();
    let local = day
        .sunset_in_zone(Zenith::Official, "America/New_York")
        .unwrap();
    let local = *local.time().unwrap();

    // Same instant, different wall clock
    assert_eq!(local.with_timezone(&Utc), utc);
    assert_eq!(local.naive_utc(), utc.naive_utc());

    // The wall clock differs from UTC by exactly the zone offset
    let offset_seconds = i64::from(local.offset().fix().local_minus_utc());
    let wall_delta = local.naive_local() - utc.naive_utc();
    assert_eq!(wall_delta.num_seconds(), offset_seconds);
}

#[test]
fn test_zone_offset_follows_dst_rule_at_the_instant() {
    // Two days later the same site is on standard time
    let day = SolarDay::new(
        NaiveDate::from_ymd_opt(2008, 11, 3).unwrap(),
        39.9537,
        -75.7850,
    )
    .unwrap();

    let local = day
        .sunset_in_zone(Zenith::Official, "America/New_York")
        .unwrap();
    let local = local.time().copied().unwrap();
    assert_eq!(local.offset().fix().local_minus_utc(), -5 * 3600);
}

#[test]
fn test_date_rolls_forward_across_the_antimeridian_side() {
    // Auckland sunrise: the UTC hour lands in the evening of the observation
    // day, so the +13:00 summer offset pushes the local date one day ahead
    let day = SolarDay::new(
        NaiveDate::from_ymd_opt(2008, 1, 15).unwrap(),
        -36.8406,
        174.7400,
    )
    .unwrap();

    let utc = *day.sunrise(Zenith::Official).time().unwrap();
    assert_eq!(utc.date_naive(), day.date());
    assert!(utc.hour() >= 12, "expected an evening UTC hour, got {utc}");

    let local = day
        .sunrise_in_zone(Zenith::Official, "Pacific/Auckland")
        .unwrap();
    let local = local.time().copied().unwrap();
    assert_eq!(local.offset().fix().local_minus_utc(), 13 * 3600);
    assert_eq!(
        local.date_naive(),
        day.date().succ_opt().unwrap(),
        "zone conversion should carry the date forward"
    );
}

#[test]
fn test_unknown_zone_is_an_error() {
    let day = chester_county();

    let err = day
        .sunset_in_zone(Zenith::Official, "Not/A_Zone")
        .unwrap_err();
    assert_eq!(err, Error::unknown_time_zone("Not/A_Zone"));

    let err = day
        .sunrise_in_zone(Zenith::Official, "EST5EDT4EWT")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownTimeZone { .. }));
}

#[test]
fn test_in_zone_helper_round_trips() {
    let utc = NaiveDate::from_ymd_opt(2008, 11, 1)
        .unwrap()
        .and_hms_opt(21, 59, 0)
        .unwrap()
        .and_utc();

    let local = time::in_zone(utc, "America/New_York").unwrap();
    assert_eq!(local.with_timezone(&Utc), utc);
    assert_eq!((local.hour(), local.minute()), (17, 59));
}
