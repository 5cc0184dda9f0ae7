//! Temporal spans resolved from `t=` fragments.
//!
//! The `t` value is split at its first comma into a start token and an end
//! token, either of which may be empty:
//!
//! | start | end | span |
//! |-------|-----|------|
//! | given | given | `start..end` |
//! | given | empty | `start..` (to the end of the resource) |
//! | empty | given | `0..end` |
//! | empty | empty | rejected |
//!
//! A span is all-or-nothing: if either token fails to parse, no span is produced.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::FragmentError;
use crate::fragment::FragmentQuery;
use crate::npt::{format_npt, parse_npt_token, strip_scheme};

/// Fragment key carrying the temporal range.
pub const TIME_KEY: &str = "t";

/// A validated playback window in seconds.
///
/// `end` is `f64::INFINITY` when the fragment only names a start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSpan {
    start: f64,
    #[serde(serialize_with = "serialize_end")]
    end: f64,
    raw: String,
}

fn serialize_end<S: Serializer>(end: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if end.is_finite() {
        serializer.serialize_some(end)
    } else {
        serializer.serialize_none()
    }
}

impl TimeSpan {
    /// Build a span directly from seconds. `raw` is derived from the numbers.
    pub fn new(start: f64, end: f64) -> Result<Self, FragmentError> {
        let raw = if end.is_finite() {
            format!("{},{}", start, end)
        } else {
            start.to_string()
        };
        Self::validated(start, end, raw)
    }

    fn validated(start: f64, end: f64, raw: String) -> Result<Self, FragmentError> {
        // NaN fails both comparisons
        let ordered = start >= 0.0 && end > start;
        if !ordered {
            return Err(FragmentError::EmptyRange { raw });
        }
        Ok(Self { start, end, raw })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// The `t` value as written (minus `npt:` markers), for re-embedding.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the span runs to the natural end of the resource.
    pub fn is_unbounded(&self) -> bool {
        self.end.is_infinite()
    }

    /// The end as an `Option`, `None` when unbounded.
    pub fn end_bound(&self) -> Option<f64> {
        (!self.is_unbounded()).then_some(self.end)
    }

    /// Fragment text to append to a resource URL, e.g. `t=10,25`.
    pub fn to_fragment(&self) -> String {
        format!("{}={}", TIME_KEY, self.raw)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", format_npt(self.start), format_npt(self.end))
    }
}

/// Resolve the `t` entry of a fragment mapping, reporting why it failed.
///
/// `Ok(None)` means the mapping simply has no usable `t` entry (absent,
/// a bare flag, or repeated).
pub fn try_extract_time_span(query: &FragmentQuery) -> Result<Option<TimeSpan>, FragmentError> {
    let Some(value) = query.single(TIME_KEY) else {
        return Ok(None);
    };

    let (start_token, end_token) = match value.split_once(',') {
        Some((start, end)) => (start, Some(end)),
        None => (value, None),
    };

    let start_given = (!start_token.is_empty()).then_some(start_token);
    let end_given = end_token.filter(|token| !token.is_empty());

    let (start, end) = match (start_given, end_given) {
        (Some(s), Some(e)) => (parse_npt_token(s)?, parse_npt_token(e)?),
        (Some(s), None) => (parse_npt_token(s)?, f64::INFINITY),
        (None, Some(e)) => (0.0, parse_npt_token(e)?),
        (None, None) => return Err(FragmentError::MissingBounds),
    };

    let mut raw = strip_scheme(start_token).to_string();
    if let Some(end_token) = end_token {
        raw.push(',');
        raw.push_str(strip_scheme(end_token));
    }

    TimeSpan::validated(start, end, raw).map(Some)
}

/// Resolve the `t` entry of a fragment mapping.
///
/// Invalid fragments are logged and treated exactly like absent ones.
pub fn extract_time_span(query: &FragmentQuery) -> Option<TimeSpan> {
    match try_extract_time_span(query) {
        Ok(Some(span)) => {
            debug!(
                raw = span.raw(),
                start = span.start(),
                end = span.end(),
                "resolved temporal fragment"
            );
            Some(span)
        }
        Ok(None) => {
            debug!("no temporal fragment present");
            None
        }
        Err(err) => {
            warn!(error = %err, "ignoring invalid temporal fragment");
            None
        }
    }
}

/// Resolve the temporal fragment of a full reference such as `clip.mp4#t=10,25`.
pub fn span_from_reference(reference: &str) -> Option<TimeSpan> {
    extract_time_span(&FragmentQuery::from_reference(reference))
}
