//! Tests for timestamp conversion
//!
//! Literal cases from the T8 API plus round-trip properties over the whole
//! range of four-digit years.

use t8_client::timestamp::{to_iso, to_unix, TimestampError};

/// Last whole second of 9999-12-31
const MAX_CANONICAL: i64 = 253_402_300_799;

#[test]
fn test_epoch() {
    assert_eq!(to_iso(0).unwrap(), "1970-01-01T00:00:00");
    assert_eq!(to_unix("1970-01-01T00:00:00").unwrap(), 0);
}

#[test]
fn test_new_year_2021() {
    assert_eq!(to_iso(1_609_459_200).unwrap(), "2021-01-01T00:00:00");
    assert_eq!(
        to_iso(to_unix("2021-01-01T00:00:00").unwrap()).unwrap(),
        "2021-01-01T00:00:00"
    );
}

#[test]
fn test_listing_timestamp() {
    assert_eq!(to_iso(1_554_907_393).unwrap(), "2019-04-10T14:43:13");
    assert_eq!(to_unix("2019-04-10T14:43:13").unwrap(), 1_554_907_393);
}

#[test]
fn test_range_edges() {
    assert_eq!(to_iso(MAX_CANONICAL).unwrap(), "9999-12-31T23:59:59");
    assert!(matches!(
        to_iso(MAX_CANONICAL + 1),
        Err(TimestampError::OutOfRange(_))
    ));
}

#[test]
fn test_not_a_date() {
    assert!(matches!(
        to_unix("not-a-date"),
        Err(TimestampError::Parse { .. })
    ));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Integer -> text -> integer is the identity
        #[test]
        fn test_unix_roundtrip(ts in 0i64..=MAX_CANONICAL) {
            prop_assert_eq!(to_unix(&to_iso(ts).unwrap()).unwrap(), ts);
        }

        /// Canonical text -> integer -> text is the identity
        #[test]
        fn test_iso_roundtrip(
            year in 1970i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let iso = format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                year, month, day, hour, minute, second
            );
            prop_assert_eq!(to_iso(to_unix(&iso).unwrap()).unwrap(), iso);
        }

        /// Second 60 is never accepted, with or without an offset
        #[test]
        fn test_second_60_rejected(
            year in 1970i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            suffix in prop::sample::select(vec!["", "Z", ".5", "+01:00"]),
        ) {
            let iso = format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:60{}",
                year, month, day, hour, minute, suffix
            );
            let is_parse_error = matches!(to_unix(&iso), Err(TimestampError::Parse { .. }));
            prop_assert!(is_parse_error);
        }

        /// Canonical output always has the fixed 19-character layout
        #[test]
        fn test_iso_layout(ts in 0i64..=MAX_CANONICAL) {
            let iso = to_iso(ts).unwrap();
            let bytes = iso.as_bytes();

            prop_assert_eq!(bytes.len(), 19);
            prop_assert_eq!(bytes[4], b'-');
            prop_assert_eq!(bytes[7], b'-');
            prop_assert_eq!(bytes[10], b'T');
            prop_assert_eq!(bytes[13], b':');
            prop_assert_eq!(bytes[16], b':');
        }
    }
}
