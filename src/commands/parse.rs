//! `tfrag parse`: resolve a temporal fragment and report the result.

use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use tfrag::embed::MediaKind;
use tfrag::fragment::FragmentQuery;
use tfrag::span::{try_extract_time_span, TimeSpan};

/// Accepts a full reference (`clip.mp4#t=1,2`), a fragment (`#t=1,2`) or a
/// bare query (`t=1,2`).
pub fn query_for(reference: &str) -> FragmentQuery {
    if reference.contains('#') {
        FragmentQuery::from_reference(reference)
    } else {
        FragmentQuery::parse(reference)
    }
}

pub fn describe(span: &TimeSpan) -> String {
    let end = match span.end_bound() {
        Some(end) => end.to_string(),
        None => "unbounded".to_string(),
    };
    format!(
        "start={} end={} raw={} ({})",
        span.start(),
        end,
        span.raw(),
        span
    )
}

/// Exit 0 when a span resolved or none was present, 1 when the fragment is invalid.
#[cfg(not(tarpaulin_include))]
pub fn handle(reference: &str, json: bool) -> Result<ExitCode> {
    let result = try_extract_time_span(&query_for(reference));

    if json {
        let kind = MediaKind::from_source(reference);
        let value = match &result {
            Ok(Some(span)) => json!({ "status": "resolved", "kind": kind, "span": span }),
            Ok(None) => json!({ "status": "absent", "kind": kind }),
            Err(err) => json!({ "status": "invalid", "kind": kind, "error": err.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match &result {
            Ok(Some(span)) => println!("{}", describe(span)),
            Ok(None) => println!("no temporal fragment"),
            Err(err) => eprintln!("error: {}", err),
        }
    }

    Ok(if result.is_err() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
