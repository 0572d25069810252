use std::{
    cell::Cell,
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
};

use chrono::{Datelike as _, NaiveDateTime};
use maybetype::{maybe, maybe_if, meta, Just, Maybe, Nothing};

fn parse_iso_datetime(s: &str) -> Maybe<NaiveDateTime> {
    Maybe::from(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H%M%S").ok())
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn parses_and_unwraps_integers() {
    assert_eq!(Maybe::try_int("5").unwrap(), Ok(5));
    assert_eq!(Maybe::try_int("five").unwrap_or(-1), -1);
}

#[test]
fn filters_recent_datetimes() {
    let recent = maybe("2025-09-06T030000")
        .and_then(parse_iso_datetime)
        .test(|d| d.year() > 2024);
    let old = maybe("2024-09-06T030000")
        .and_then(parse_iso_datetime)
        .test(|d| d.year() > 2024);

    assert!(recent.is_just());
    assert_eq!(recent.then(|d| d.month()), Some(9));
    assert_eq!(old, Nothing);
}

#[test]
fn malformed_datetime_short_circuits_rest_of_pipeline() {
    let tested = Cell::new(false);

    let result = maybe("yesterday")
        .and_then(parse_iso_datetime)
        .test(|_| {
            tested.set(true);
            true
        });

    assert_eq!(result, Nothing);
    assert!(!tested.get());
}

#[test]
fn sequences_and_cats() {
    assert_eq!(
        Maybe::sequence(vec![Just(1), Just(2), Just(3)]),
        Just(vec![1, 2, 3]),
    );
    assert_eq!(Maybe::sequence(vec![Just(1), Nothing, Just(3)]), Nothing);
    assert_eq!(Maybe::cat(vec![Just(1), Nothing, Just(3), Nothing]), [1, 3]);
}

#[test]
fn reads_nested_config() {
    let config: HashMap<&str, Vec<&str>> =
        HashMap::from([("hosts", vec!["a.local", "b.local"])]);
    let config = Just(config);

    assert_eq!(config.get("hosts").get(&1).copied(), Just("b.local"));
    assert_eq!(config.get("hosts").get(&2), Nothing);
    assert_eq!(config.get("ports").get(&0), Nothing);
}

#[test]
fn equal_values_hash_equally() {
    assert_eq!(Just(5), Just(5));
    assert_eq!(hash_of(&Just(5)), hash_of(&5));

    let (a, b): (Maybe<i32>, Maybe<i32>) = (maybe(None), maybe_if(1, |_| false));
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn bridges_to_plain_options() {
    assert_eq!(Just(0).then(|v| v.to_string()), Some("0".to_owned()));

    let port: Option<u16> = maybe(8080_u16).into_option();
    assert_eq!(port, Some(8080));
}

#[test]
fn exposes_metadata() {
    assert_eq!(meta::NAME, "maybetype");
    assert!(!meta::VERSION.is_empty());
}
