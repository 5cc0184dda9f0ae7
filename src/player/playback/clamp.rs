//! Persistent clamping of playback to a window.
//!
//! Two listeners stay installed for the element's lifetime:
//! - `playing`: a position outside `[start, end]` snaps back to `start`
//! - `timeupdate`: past `end`, pause (or rewind to `start` when looping)

use tracing::{debug, trace};

use crate::error::ControlError;
use crate::player::element::MediaElement;
use crate::player::state::{ListenerFlow, PlaybackEvent, PlaybackHandle};
use crate::span::TimeSpan;

/// Start/end pair attached to a persistently bound element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundWindow {
    pub start: f64,
    pub end: f64,
}

impl BoundWindow {
    /// Build a window, rejecting empty or inverted ranges.
    pub fn new(start: f64, end: f64) -> Result<Self, ControlError> {
        // NaN fails the comparison
        let non_empty = end > start;
        if !non_empty {
            return Err(ControlError::EmptyWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_span(span: &TimeSpan) -> Result<Self, ControlError> {
        Self::new(span.start(), span.end())
    }

    /// Whether `position` lies inside `[start, end]`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position <= self.end
    }
}

/// What a clamp listener did to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampAction {
    /// Position was inside the window
    None,
    /// Position snapped back to the window start
    Snapped,
    /// Playback paused at the window end
    Paused,
    /// Looping: position rewound to the window start
    Rewound,
}

/// Re-anchor a handle that resumed outside its window.
pub fn snap_on_playing<H: PlaybackHandle + ?Sized>(
    window: BoundWindow,
    handle: &mut H,
) -> ClampAction {
    let position = handle.current_time();
    if window.contains(position) {
        return ClampAction::None;
    }

    handle.set_current_time(window.start);
    debug!(position, start = window.start, "resumed outside window, snapping to start");
    ClampAction::Snapped
}

/// Stop or loop a handle that ran past its window end.
pub fn clamp_on_time_update<H: PlaybackHandle + ?Sized>(
    window: BoundWindow,
    handle: &mut H,
) -> ClampAction {
    let position = handle.current_time();
    if position <= window.end {
        return ClampAction::None;
    }

    if handle.looping() {
        handle.set_current_time(window.start);
        debug!(position, start = window.start, "window end reached, looping");
        ClampAction::Rewound
    } else {
        handle.pause();
        debug!(position, end = window.end, "window end reached, pausing");
        ClampAction::Paused
    }
}

/// Install the clamping listeners on `element`.
///
/// With `span == None` the listeners are still installed but leave the handle
/// alone, so a plain element behaves exactly as before. Any previous listeners
/// are replaced.
pub fn bind_persistent<H: PlaybackHandle + 'static>(
    span: Option<&TimeSpan>,
    element: &mut MediaElement<H>,
) -> Result<(), ControlError> {
    let window = span.map(BoundWindow::from_span).transpose()?;
    element.set_bound_window(window);

    element.set_listener(
        PlaybackEvent::Playing,
        Box::new(move |handle: &mut H| {
            if let Some(window) = window {
                let action = snap_on_playing(window, handle);
                trace!(?action, "playing clamp");
            }
            ListenerFlow::Keep
        }),
    );
    element.set_listener(
        PlaybackEvent::TimeUpdate,
        Box::new(move |handle: &mut H| {
            if let Some(window) = window {
                let action = clamp_on_time_update(window, handle);
                trace!(?action, "timeupdate clamp");
            }
            ListenerFlow::Keep
        }),
    );

    Ok(())
}
