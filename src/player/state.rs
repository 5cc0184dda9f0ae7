//! Playback handle contract and shared types.
//!
//! Contains the `PlaybackHandle` trait that any media backend implements,
//! the notification kinds controllers subscribe to, and the flow signal
//! listeners return.

/// A live media playback handle.
///
/// Controllers never own the handle's lifetime; they only read and adjust
/// its position and play state from inside notification listeners.
pub trait PlaybackHandle {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seek to `seconds`.
    fn set_current_time(&mut self, seconds: f64);

    /// Whether playback is paused.
    fn paused(&self) -> bool;

    /// Whether the resource restarts when it reaches its natural end.
    fn looping(&self) -> bool;

    fn set_looping(&mut self, looping: bool);

    /// Source reference (URL or path) of the resource being played.
    fn source(&self) -> &str;

    fn set_source(&mut self, source: String);

    fn play(&mut self);

    fn pause(&mut self);
}

/// Notifications a playback handle emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackEvent {
    /// Playback started or resumed
    Playing,
    /// Playback position changed
    TimeUpdate,
}

impl PlaybackEvent {
    /// Event name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::TimeUpdate => "timeupdate",
        }
    }
}

/// Returned by a listener to keep or drop its own registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerFlow {
    /// Stay registered for the next notification
    Keep,
    /// Unregister after this call
    Remove,
}

/// A notification callback bound to one handle type.
pub type Listener<H> = Box<dyn FnMut(&mut H) -> ListenerFlow>;
