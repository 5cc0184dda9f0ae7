//! Embedded media preparation.
//!
//! An embed reference such as `talk.mp4#t=30,45&loop` is resolved once, when
//! its media element appears: the span is copied into the element's source
//! fragment, a bare `loop` flag turns looping on, and the persistent clamp is
//! installed.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::ControlError;
use crate::fragment::FragmentQuery;
use crate::player::{bind_persistent, MediaElement, PlaybackHandle};
use crate::span::{extract_time_span, TimeSpan};

/// Fragment flag that turns looping on for an embed.
pub const LOOP_FLAG: &str = "loop";

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "3gp", "flac"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogv"];

/// Kind of media element a source should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Classify a source by its file extension, ignoring query and fragment.
    pub fn from_source(source: &str) -> Option<Self> {
        let path = source.split(['#', '?']).next().unwrap_or(source);
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = file_name.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();

        if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Audio)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// Replace the fragment of `source` with `t=<raw>` from `span`.
///
/// Absolute URLs go through `url::Url`; relative references are spliced.
pub fn with_time_fragment(source: &str, span: &TimeSpan) -> String {
    let fragment = span.to_fragment();
    match Url::parse(source) {
        Ok(mut url) => {
            url.set_fragment(Some(&fragment));
            url.into()
        }
        Err(_) => {
            let base = source.split('#').next().unwrap_or(source);
            format!("{}#{}", base, fragment)
        }
    }
}

/// Prepare a freshly created media element for the embed `reference`.
///
/// Returns the span that was bound, if the reference carried a valid one.
pub fn prepare_embed<H: PlaybackHandle + 'static>(
    reference: &str,
    element: &mut MediaElement<H>,
) -> Result<Option<TimeSpan>, ControlError> {
    let query = FragmentQuery::from_reference(reference);
    let span = extract_time_span(&query);

    if let Some(span) = &span {
        let source = with_time_fragment(element.handle().source(), span);
        let kind = MediaKind::from_source(&source);
        debug!(%source, ?kind, "embedding temporal fragment into source");
        element.handle_mut().set_source(source);
    }

    if query.has_flag(LOOP_FLAG) {
        element.handle_mut().set_looping(true);
    }

    bind_persistent(span.as_ref(), element)?;
    Ok(span)
}
