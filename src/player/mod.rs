//! Playback range control
//!
//! Binds resolved time spans to live playback handles.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: the `PlaybackHandle` trait and shared types (PlaybackEvent, ListenerFlow)
//! - `element`: `MediaElement`, a handle composed with its listener slots
//! - `playback/`: the one-shot and persistent range controllers
//!
//! # Usage
//!
//! ```
//! use tfrag::player::{bind_once, MediaElement, PlaybackEvent, PlaybackHandle};
//! use tfrag::sim::SimulatedPlayer;
//! use tfrag::span::span_from_reference;
//!
//! let span = span_from_reference("talk.mp4#t=5,10").unwrap();
//! let mut element = MediaElement::new(SimulatedPlayer::new("talk.mp4", 60.0));
//!
//! bind_once(&span, &mut element);
//! assert_eq!(element.handle().current_time(), 5.0);
//!
//! element.handle_mut().set_current_time(10.0);
//! element.dispatch(PlaybackEvent::TimeUpdate);
//! assert!(element.handle().paused());
//! ```

pub mod element;
pub mod playback;
pub mod state;

pub use element::MediaElement;
pub use playback::{bind_once, bind_persistent, BoundWindow, ClampAction};
pub use state::{Listener, ListenerFlow, PlaybackEvent, PlaybackHandle};
