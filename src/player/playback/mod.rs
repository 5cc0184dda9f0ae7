//! Playback range controllers.
//!
//! This module binds resolved time spans to playback handles: a one-shot
//! jump that stops at the span's end, and a persistent clamp that keeps
//! (or loops) playback inside the span.

mod clamp;
mod jump;

pub use clamp::{bind_persistent, clamp_on_time_update, snap_on_playing, BoundWindow, ClampAction};
pub use jump::bind_once;
