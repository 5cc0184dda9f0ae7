//! Normal Play Time (NPT) tokens.
//!
//! A token is one side of a `t=` fragment: plain seconds (`12.5`), `mm:ss`
//! (`01:30`) or `hh:mm:ss` (`1:02:03`), optionally prefixed with `npt:`.
//! Minutes and seconds fields are always two digits in `00`-`59`; hours are
//! unbounded.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FragmentError;

/// Optional scheme marker in front of a token.
pub const NPT_PREFIX: &str = "npt:";

static NPT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:npt:)?([0-9.:]+)$").unwrap());
static NPT_SEC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").unwrap());
static NPT_MMSS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<mm>[0-5][0-9]):(?P<ss>[0-5][0-9](?:\.[0-9]+)?)$").unwrap());
static NPT_HHMMSS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<hh>[0-9]+):(?P<mm>[0-5][0-9]):(?P<ss>[0-5][0-9](?:\.[0-9]+)?)$").unwrap()
});

/// Strip a leading `npt:` marker, if any.
pub fn strip_scheme(token: &str) -> &str {
    token.strip_prefix(NPT_PREFIX).unwrap_or(token)
}

/// Parse a single NPT token into seconds.
///
/// The three grammars are tried in order (seconds, `mm:ss`, `hh:mm:ss`) and the
/// first match wins. Anything else, including the empty string, is a
/// [`FragmentError::TokenSyntax`].
pub fn parse_npt_token(token: &str) -> Result<f64, FragmentError> {
    let syntax_error = || FragmentError::TokenSyntax {
        token: token.to_string(),
    };

    let time = NPT_TOKEN
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(syntax_error)?;

    if NPT_SEC.is_match(time) {
        return number(time).ok_or_else(syntax_error);
    }

    if let Some(caps) = NPT_MMSS.captures(time) {
        let mm = number(&caps["mm"]).ok_or_else(syntax_error)?;
        let ss = number(&caps["ss"]).ok_or_else(syntax_error)?;
        return Ok(mm * 60.0 + ss);
    }

    if let Some(caps) = NPT_HHMMSS.captures(time) {
        let hh = number(&caps["hh"]).ok_or_else(syntax_error)?;
        let mm = number(&caps["mm"]).ok_or_else(syntax_error)?;
        let ss = number(&caps["ss"]).ok_or_else(syntax_error)?;
        return Ok(hh * 3600.0 + mm * 60.0 + ss);
    }

    Err(syntax_error())
}

fn number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format seconds as an NPT clock string.
///
/// Produces `mm:ss` below an hour and `h:mm:ss` above, keeping up to three
/// fractional digits. Unbounded (infinite) values render as `end`.
pub fn format_npt(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "end".to_string();
    }

    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let total_secs = millis / 1000;
    let frac = millis % 1000;

    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let clock = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    };

    if frac == 0 {
        clock
    } else {
        let frac = format!("{:03}", frac);
        format!("{}.{}", clock, frac.trim_end_matches('0'))
    }
}
