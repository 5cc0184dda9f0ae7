//! Integration tests for NPT parsing and span extraction

use tfrag::fragment::FragmentQuery;
use tfrag::npt::parse_npt_token;
use tfrag::span::{extract_time_span, span_from_reference};

fn t(value: &str) -> FragmentQuery {
    FragmentQuery::from_pairs([("t", value)])
}

#[test]
fn plain_seconds_equal_their_numeric_value() {
    for token in ["0", "1", "7.25", "42", "86400", "0.001", "0012"] {
        let expected: f64 = token.parse().unwrap();
        assert_eq!(parse_npt_token(token), Ok(expected), "{token}");
    }
}

#[test]
fn every_valid_mm_ss_pair() {
    for mm in 0..60u32 {
        for ss in 0..60u32 {
            let token = format!("{:02}:{:02}", mm, ss);
            assert_eq!(parse_npt_token(&token), Ok(f64::from(mm * 60 + ss)));
        }
    }
}

#[test]
fn sixty_minutes_or_seconds_fail() {
    for ss in 0..60u32 {
        assert!(parse_npt_token(&format!("60:{:02}", ss)).is_err());
        assert!(parse_npt_token(&format!("{:02}:60", ss)).is_err());
    }
}

#[test]
fn documented_extraction_examples() {
    let span = extract_time_span(&t("10,25")).unwrap();
    assert_eq!((span.start(), span.end(), span.raw()), (10.0, 25.0, "10,25"));

    let span = extract_time_span(&t("10")).unwrap();
    assert_eq!((span.start(), span.end(), span.raw()), (10.0, f64::INFINITY, "10"));

    let span = extract_time_span(&t(",25")).unwrap();
    assert_eq!((span.start(), span.end(), span.raw()), (0.0, 25.0, ",25"));

    assert_eq!(extract_time_span(&t("")), None);
    assert_eq!(extract_time_span(&FragmentQuery::default()), None);

    let span = extract_time_span(&t("npt:1:02:03,npt:1:05:00")).unwrap();
    assert_eq!(
        (span.start(), span.end(), span.raw()),
        (3723.0, 3900.0, "1:02:03,1:05:00")
    );
}

#[test]
fn extraction_twice_yields_equal_spans() {
    let query = FragmentQuery::parse("t=npt:00:30,01:15&loop");
    let first = extract_time_span(&query).unwrap();
    let second = extract_time_span(&query).unwrap();
    assert_eq!(first, second);
}

#[test]
fn percent_encoded_reference_resolves() {
    let span = span_from_reference("notes/talk.webm#t=npt%3A01%3A00%2C02%3A00").unwrap();
    assert_eq!(span.start(), 60.0);
    assert_eq!(span.end(), 120.0);
    assert_eq!(span.raw(), "01:00,02:00");
}

#[test]
fn other_keys_do_not_interfere() {
    let span = span_from_reference("clip.mp4#xywh=160,120,320,240&t=3,4").unwrap();
    assert_eq!(span.raw(), "3,4");
    assert_eq!(span_from_reference("clip.mp4#xywh=160,120,320,240"), None);
}
