//! A playback handle together with its listeners and bound window.
//!
//! `MediaElement` composes an externally supplied handle with the state the
//! controllers attach to it, so nothing is written onto the handle itself.

use std::fmt;

use tracing::trace;

use crate::player::playback::BoundWindow;
use crate::player::state::{Listener, ListenerFlow, PlaybackEvent, PlaybackHandle};

/// A handle plus one listener slot per notification kind.
pub struct MediaElement<H> {
    handle: H,
    on_playing: Option<Listener<H>>,
    on_time_update: Option<Listener<H>>,
    window: Option<BoundWindow>,
}

impl<H: PlaybackHandle> MediaElement<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            on_playing: None,
            on_time_update: None,
            window: None,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }

    /// The window a persistent binding attached, if any.
    ///
    /// Stays set when a later `bind_once` takes over the `timeupdate` slot;
    /// the `playing` snap still enforces it.
    pub fn bound_window(&self) -> Option<BoundWindow> {
        self.window
    }

    pub(crate) fn set_bound_window(&mut self, window: Option<BoundWindow>) {
        self.window = window;
    }

    /// Register `listener` for `event`, replacing any previous one.
    pub fn set_listener(&mut self, event: PlaybackEvent, listener: Listener<H>) {
        *self.slot_mut(event) = Some(listener);
    }

    pub fn has_listener(&self, event: PlaybackEvent) -> bool {
        match event {
            PlaybackEvent::Playing => self.on_playing.is_some(),
            PlaybackEvent::TimeUpdate => self.on_time_update.is_some(),
        }
    }

    /// Deliver one notification to its listener.
    ///
    /// Returns true if a listener ran. A listener returning
    /// [`ListenerFlow::Remove`] is dropped afterwards.
    pub fn dispatch(&mut self, event: PlaybackEvent) -> bool {
        let Some(mut listener) = self.slot_mut(event).take() else {
            return false;
        };

        let flow = listener(&mut self.handle);
        trace!(
            event = event.name(),
            position = self.handle.current_time(),
            ?flow,
            "dispatched"
        );

        if flow == ListenerFlow::Keep {
            *self.slot_mut(event) = Some(listener);
        }
        true
    }

    fn slot_mut(&mut self, event: PlaybackEvent) -> &mut Option<Listener<H>> {
        match event {
            PlaybackEvent::Playing => &mut self.on_playing,
            PlaybackEvent::TimeUpdate => &mut self.on_time_update,
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for MediaElement<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaElement")
            .field("handle", &self.handle)
            .field("on_playing", &self.on_playing.is_some())
            .field("on_time_update", &self.on_time_update.is_some())
            .field("window", &self.window)
            .finish()
    }
}
