//! Deterministic simulated playback.
//!
//! `SimulatedPlayer` is a playback handle with a fixed duration that advances
//! only when told to. It queues the notifications a real media element would
//! emit, and `Simulation` delivers them in order to a `MediaElement`.

use std::collections::VecDeque;

use serde::Serialize;

use crate::player::{MediaElement, PlaybackEvent, PlaybackHandle};

/// An in-memory playback handle.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    position: f64,
    duration: f64,
    paused: bool,
    looping: bool,
    source: String,
    pending: VecDeque<PlaybackEvent>,
}

impl SimulatedPlayer {
    /// A paused player at position 0 for a resource of `duration` seconds.
    pub fn new(source: impl Into<String>, duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            paused: true,
            looping: false,
            source: source.into(),
            pending: VecDeque::new(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Play forward by `dt` seconds and queue a position update.
    ///
    /// At the natural end the player wraps to 0 when looping, otherwise it
    /// stops and pauses there. Does nothing while paused.
    pub fn advance(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        self.position += dt;
        if self.position >= self.duration {
            if self.looping {
                self.position = 0.0;
            } else {
                self.position = self.duration;
                self.paused = true;
            }
        }
        self.pending.push_back(PlaybackEvent::TimeUpdate);
    }

    /// Next queued notification, oldest first.
    pub fn next_event(&mut self) -> Option<PlaybackEvent> {
        self.pending.pop_front()
    }

    /// Drain every queued notification.
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        self.pending.drain(..).collect()
    }
}

impl PlaybackHandle for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn set_source(&mut self, source: String) {
        self.source = source;
    }

    fn play(&mut self) {
        if self.paused {
            self.paused = false;
            if self.position >= self.duration {
                self.position = 0.0;
            }
            self.pending.push_back(PlaybackEvent::Playing);
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }
}

/// One observation of the player after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub tick: usize,
    pub position: f64,
    pub paused: bool,
}

/// Drives a simulated element tick by tick.
#[derive(Debug)]
pub struct Simulation {
    element: MediaElement<SimulatedPlayer>,
    tick: f64,
    ticks_run: usize,
    trace: Vec<Sample>,
}

impl Simulation {
    pub fn new(element: MediaElement<SimulatedPlayer>, tick: f64) -> Self {
        Self {
            element,
            tick,
            ticks_run: 0,
            trace: Vec::new(),
        }
    }

    pub fn element(&self) -> &MediaElement<SimulatedPlayer> {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut MediaElement<SimulatedPlayer> {
        &mut self.element
    }

    /// Deliver queued notifications in the order they were emitted.
    ///
    /// Listeners may queue further notifications (e.g. by calling `play`);
    /// those are delivered in the same pass.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.element.handle_mut().next_event() {
            self.element.dispatch(event);
            delivered += 1;
        }
        delivered
    }

    /// Advance one tick, deliver its notifications and record a sample.
    pub fn step(&mut self) -> Sample {
        self.pump();
        self.element.handle_mut().advance(self.tick);
        self.pump();

        self.ticks_run += 1;
        let handle = self.element.handle();
        let sample = Sample {
            tick: self.ticks_run,
            position: handle.current_time(),
            paused: handle.paused(),
        };
        self.trace.push(sample);
        sample
    }

    /// Run `ticks` steps, stopping early once the player is paused.
    pub fn run(&mut self, ticks: usize) -> &[Sample] {
        self.pump();
        for _ in 0..ticks {
            if self.element.handle().paused() {
                break;
            }
            self.step();
        }
        &self.trace
    }

    pub fn trace(&self) -> &[Sample] {
        &self.trace
    }
}
