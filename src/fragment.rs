//! URL fragment identifiers as key/value mappings.
//!
//! `video.mp4#t=10,25&loop` becomes `{t: Single("10,25"), loop: Flag}`.

use std::collections::BTreeMap;

/// A value bound to one key of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentValue {
    /// Key given without `=` (e.g. `#loop`)
    Flag,
    /// Key given exactly once with a value
    Single(String),
    /// Key repeated; values in order of appearance
    Multiple(Vec<String>),
}

impl FragmentValue {
    fn push(&mut self, value: Option<String>) {
        let incoming = value.unwrap_or_default();
        *self = match std::mem::replace(self, FragmentValue::Flag) {
            FragmentValue::Flag => FragmentValue::Multiple(vec![String::new(), incoming]),
            FragmentValue::Single(first) => FragmentValue::Multiple(vec![first, incoming]),
            FragmentValue::Multiple(mut values) => {
                values.push(incoming);
                FragmentValue::Multiple(values)
            }
        };
    }
}

/// Return the fragment part of a URL or link reference (text after the first `#`).
///
/// `None` when there is no `#` or nothing follows it.
pub fn split_fragment(reference: &str) -> Option<&str> {
    reference
        .split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

/// Decoded key/value view of a fragment identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentQuery {
    params: BTreeMap<String, FragmentValue>,
}

impl FragmentQuery {
    /// Parse a fragment such as `t=10,25&loop`. A leading `#` is ignored.
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut params: BTreeMap<String, FragmentValue> = BTreeMap::new();

        for pair in fragment.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (decode(k), Some(decode(v))),
                None => (decode(pair), None),
            };
            if key.is_empty() {
                continue;
            }

            match params.get_mut(&key) {
                Some(existing) => existing.push(value),
                None => {
                    let entry = match value {
                        Some(v) => FragmentValue::Single(v),
                        None => FragmentValue::Flag,
                    };
                    params.insert(key, entry);
                }
            }
        }

        Self { params }
    }

    /// Parse the fragment of a full reference, or an empty query if it has none.
    pub fn from_reference(reference: &str) -> Self {
        split_fragment(reference)
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Build a query from already-decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), FragmentValue::Single(v.into())))
            .collect();
        Self { params }
    }

    /// The value of `key` when it was given exactly once with `=`.
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(FragmentValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether `key` appears as a bare flag (no `=`).
    pub fn has_flag(&self, key: &str) -> bool {
        matches!(self.params.get(key), Some(FragmentValue::Flag))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// `+` means space, then percent-decode; malformed escapes are kept verbatim.
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
