//! One-shot jump to a span.
//!
//! Used when a reference is followed interactively: seek to the start, play,
//! and pause the first time the end is reached. Later user seeks are left alone.

use tracing::debug;

use crate::player::element::MediaElement;
use crate::player::state::{ListenerFlow, PlaybackEvent, PlaybackHandle};
use crate::span::TimeSpan;

/// Seek `element` to the span's start and stop once at its end.
///
/// When the span is unbounded no end watch is installed.
///
/// The end watch takes the element's single `timeupdate` slot. On an element
/// already bound with [`bind_persistent`](super::bind_persistent) it replaces
/// the end clamp, while the `playing` snap and
/// [`MediaElement::bound_window`] stay as they were.
pub fn bind_once<H: PlaybackHandle + 'static>(span: &TimeSpan, element: &mut MediaElement<H>) {
    if let Some(end) = span.end_bound() {
        element.set_listener(
            PlaybackEvent::TimeUpdate,
            Box::new(move |handle: &mut H| {
                if handle.current_time() >= end {
                    debug!(
                        position = handle.current_time(),
                        end,
                        "reached end of span, pausing"
                    );
                    handle.pause();
                    ListenerFlow::Remove
                } else {
                    ListenerFlow::Keep
                }
            }),
        );
    }

    let handle = element.handle_mut();
    handle.set_current_time(span.start());
    if handle.paused() {
        handle.play();
    }
    debug!(span = %span, "jumped to span");
}
