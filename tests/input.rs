use secret_recovery::encoding::Radix;
use secret_recovery::{Error, Point, Polynomial, RoundingMode, Share, ShareSet};

use num_bigint::BigInt;
use std::io::Write;

const SAMPLE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

#[test]
fn recovers_sample_document() {
    let set = ShareSet::from_json_str(SAMPLE).unwrap();

    assert_eq!(set.threshold(), 3);
    assert_eq!(set.declared_total(), Some(4));
    assert_eq!(set.len(), 4);

    let recovery = set.recover(RoundingMode::default()).unwrap();

    assert_eq!(recovery.secret.value(), &BigInt::from(3));
    assert!(recovery.warnings.is_empty());
    assert_eq!(
        recovery.points,
        vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
    );
}

#[test]
fn selection_takes_first_k_in_document_order() {
    let doc = r#"{
        "keys": { "n": 3, "k": 2 },
        "10": { "base": "10", "value": "30" },
        "2": { "base": "10", "value": "14" },
        "1": { "base": "10", "value": "999" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();
    let selected = set.select().unwrap();

    let ids: Vec<i64> = selected.iter().map(Share::id).collect();
    assert_eq!(ids, vec![10, 2]);

    // y = 2x + 10 through (10, 30) and (2, 14); the third share is ignored.
    let recovery = set.recover(RoundingMode::default()).unwrap();
    assert_eq!(recovery.secret.value(), &BigInt::from(10));
}

#[test]
fn trailing_inconsistent_share_is_not_selected() {
    let doc = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "10", "value": "7" },
        "3": { "base": "10", "value": "12" },
        "4": { "base": "10", "value": "999" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();

    let ids: Vec<i64> = set.shares().iter().map(Share::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let selected: Vec<i64> = set.select().unwrap().iter().map(Share::id).collect();
    assert_eq!(selected, vec![1, 2, 3]);

    let recovery = set.recover(RoundingMode::default()).unwrap();
    assert_eq!(recovery.secret.value(), &BigInt::from(3));
}

#[test]
fn keys_entry_may_appear_anywhere() {
    let doc = r#"{
        "1": { "base": "10", "value": "4" },
        "keys": { "n": 3, "k": 2 },
        "2": { "base": "10", "value": "7" },
        "3": { "base": "10", "value": "500" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();

    let ids: Vec<i64> = set.shares().iter().map(Share::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Line through (1, 4) and (2, 7).
    let recovery = set.recover(RoundingMode::default()).unwrap();
    assert_eq!(recovery.secret.value(), &BigInt::from(1));
}

#[test]
fn not_enough_shares_fails_before_reconstruction() {
    let doc = r#"{
        "keys": { "n": 2, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "10", "value": "7" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();

    let err = set.recover(RoundingMode::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::NotEnoughShares {
            found: 2,
            required: 3
        }
    ));
    assert_eq!(err.to_string(), "not enough shares: found 2, but need 3");
}

#[test]
fn colliding_identifiers_fail_reconstruction() {
    let doc = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "4" },
        "01": { "base": "10", "value": "5" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();
    let err = set.recover(RoundingMode::default()).unwrap_err();

    assert!(matches!(err, Error::DuplicateX { x: 1 }));
}

#[test]
fn invalid_digits_are_reported_not_fatal() {
    let doc = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "2", "value": "1021" },
        "2": { "base": "10", "value": "7" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();
    let recovery = set.recover(RoundingMode::default()).unwrap();

    // "1021" in base 2 decodes as "101" = 5; line through (1, 5), (2, 7).
    assert_eq!(recovery.points[0], Point::new(1, 5));
    assert_eq!(recovery.secret.value(), &BigInt::from(3));

    assert_eq!(recovery.warnings.len(), 1);
    assert_eq!(recovery.warnings[0].share_id, 1);
    assert_eq!(recovery.warnings[0].warning.character, '2');
    assert_eq!(
        recovery.warnings[0].to_string(),
        "share 1: invalid digit '2' for base 2 at position 2"
    );
}

#[test]
fn malformed_documents() {
    assert!(matches!(
        ShareSet::from_json_str(r#"{ "1": { "base": "10", "value": "4" } }"#),
        Err(Error::MissingKeys)
    ));

    assert!(matches!(
        ShareSet::from_json_str(r#"{ "keys": { "k": 0 } }"#),
        Err(Error::InvalidThreshold(0))
    ));

    assert!(matches!(
        ShareSet::from_json_str(r#"{ "keys": { "k": 1 }, "one": { "base": "10", "value": "4" } }"#),
        Err(Error::InvalidIdentifier(_))
    ));

    assert!(matches!(
        ShareSet::from_json_str(r#"{ "keys": { "k": 1 }, "1": { "value": "4" } }"#),
        Err(Error::MalformedShare { .. })
    ));

    assert!(matches!(
        ShareSet::from_json_str(r#"{ "keys": { "k": 1 }, "1": { "base": "20", "value": "4" } }"#),
        Err(Error::InvalidBase(20))
    ));

    assert!(matches!(
        ShareSet::from_json_str("[1, 2, 3]"),
        Err(Error::Json(_))
    ));
}

#[test]
fn threshold_override() {
    let set = ShareSet::from_json_str(SAMPLE).unwrap();

    let set = set.with_threshold(5).unwrap();
    assert!(matches!(
        set.select(),
        Err(Error::NotEnoughShares {
            found: 4,
            required: 5
        })
    ));

    assert!(set.with_threshold(0).is_err());
}

#[test]
fn generated_document_round_trips_through_recovery() {
    let poly = Polynomial::new([
        "98765432109876543210".parse::<BigInt>().unwrap(),
        BigInt::from(77),
        BigInt::from(3),
        BigInt::from(8_000_000_000u64),
    ]);
    let points = poly.sample(&[2, 5, 7, 11, 13]).unwrap();

    let set = ShareSet::from_points(poly.threshold(), &points, Radix::new(7).unwrap()).unwrap();
    let json = set.to_json_string().unwrap();

    let reloaded = ShareSet::from_json_str(&json).unwrap();
    assert_eq!(reloaded.threshold(), 4);
    assert_eq!(reloaded.declared_total(), Some(5));

    let recovery = reloaded.recover(RoundingMode::HalfEven).unwrap();
    assert_eq!(recovery.secret.value(), poly.constant());
}

#[test]
fn negative_points_cannot_be_encoded() {
    let point = Point::new(3, -1);
    assert!(matches!(
        Share::from_point(&point, Radix::HEX),
        Err(Error::NegativeValue { x: 3 })
    ));
}

#[test]
fn share_decode() {
    let share = Share::new(4, Radix::HEX, "Ff");
    let (point, warnings) = share.decode();

    assert_eq!(point, Point::new(4, 255));
    assert!(warnings.is_empty());
    assert_eq!(share.digits(), "Ff");
    assert_eq!(share.radix(), Radix::HEX);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let set = ShareSet::from_json_file(file.path()).unwrap();
    let recovery = set.recover(RoundingMode::default()).unwrap();

    assert_eq!(recovery.secret.to_string(), "3");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ShareSet::from_json_file(dir.path().join("absent.json"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn render_lists_points_and_secret() {
    let set = ShareSet::from_json_str(SAMPLE).unwrap();
    let recovery = set.recover(RoundingMode::default()).unwrap();

    let text = recovery.render(set.threshold(), RoundingMode::default());

    assert_eq!(
        text,
        "Minimum number of points required (k): 3\n\
         Parsed point 1: (x=1, y=4)\n\
         Parsed point 2: (x=2, y=7)\n\
         Parsed point 3: (x=3, y=12)\n\
         The calculated secret (C) is: 3\n"
    );
}

#[test]
fn render_shows_exact_value_when_rounded() {
    let doc = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "1" },
        "3": { "base": "10", "value": "2" }
    }"#;

    let set = ShareSet::from_json_str(doc).unwrap();
    let recovery = set.recover(RoundingMode::HalfEven).unwrap();

    let text = recovery.render(set.threshold(), RoundingMode::HalfEven);

    assert!(text.contains("The calculated secret (C) is: 0\n"));
    assert!(text.ends_with("Exact interpolated value: 1/2 (rounded half-even)\n"));
}
