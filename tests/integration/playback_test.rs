//! Integration tests for span-bound playback

use tfrag::embed::prepare_embed;
use tfrag::player::{bind_once, bind_persistent, MediaElement, PlaybackEvent, PlaybackHandle};
use tfrag::sim::{SimulatedPlayer, Simulation};
use tfrag::span::{span_from_reference, TimeSpan};

fn player(looping: bool) -> SimulatedPlayer {
    let mut player = SimulatedPlayer::new("clip.mp4", 60.0);
    player.set_looping(looping);
    player
}

#[test]
fn jump_and_stop_scenario() {
    let span = TimeSpan::new(5.0, 10.0).unwrap();
    let mut element = MediaElement::new(player(false));
    assert!(element.handle().paused());

    bind_once(&span, &mut element);
    assert_eq!(element.handle().current_time(), 5.0);
    assert!(!element.handle().paused());

    element.handle_mut().set_current_time(10.0);
    element.dispatch(PlaybackEvent::TimeUpdate);
    assert!(element.handle().paused());

    // Further notifications no longer change anything
    element.handle_mut().play();
    element.handle_mut().set_current_time(15.0);
    element.dispatch(PlaybackEvent::TimeUpdate);
    element.dispatch(PlaybackEvent::TimeUpdate);
    assert!(!element.handle().paused());
    assert_eq!(element.handle().current_time(), 15.0);
}

#[test]
fn clamp_loop_rewinds_and_keeps_playing() {
    let span = TimeSpan::new(5.0, 10.0).unwrap();
    let mut element = MediaElement::new(player(true));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();

    element.handle_mut().set_current_time(11.0);
    element.dispatch(PlaybackEvent::TimeUpdate);

    assert_eq!(element.handle().current_time(), 5.0);
    assert!(!element.handle().paused());
}

#[test]
fn clamp_without_loop_pauses_in_place() {
    let span = TimeSpan::new(5.0, 10.0).unwrap();
    let mut element = MediaElement::new(player(false));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();

    element.handle_mut().set_current_time(11.0);
    element.dispatch(PlaybackEvent::TimeUpdate);

    assert!(element.handle().paused());
    assert_eq!(element.handle().current_time(), 11.0);
}

#[test]
fn state_is_only_inspected_when_a_notification_is_delivered() {
    let span = TimeSpan::new(5.0, 10.0).unwrap();
    let mut element = MediaElement::new(player(false));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();

    // Past the end, but nothing delivered yet
    element.handle_mut().set_current_time(20.0);
    assert!(!element.handle().paused());
    assert_eq!(element.handle().current_time(), 20.0);

    element.dispatch(PlaybackEvent::TimeUpdate);
    assert!(element.handle().paused());
}

#[test]
fn outcome_follows_delivery_order() {
    let span = TimeSpan::new(5.0, 10.0).unwrap();

    // playing, then timeupdate: snapped back first, so nothing to stop
    let mut element = MediaElement::new(player(false));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();
    element.handle_mut().set_current_time(11.0);
    element.dispatch(PlaybackEvent::Playing);
    element.dispatch(PlaybackEvent::TimeUpdate);
    assert_eq!(element.handle().current_time(), 5.0);
    assert!(!element.handle().paused());

    // timeupdate, then playing: paused at 11, then snapped to 5
    let mut element = MediaElement::new(player(false));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();
    element.handle_mut().set_current_time(11.0);
    element.dispatch(PlaybackEvent::TimeUpdate);
    element.dispatch(PlaybackEvent::Playing);
    assert_eq!(element.handle().current_time(), 5.0);
    assert!(element.handle().paused());
}

#[test]
fn rebinding_a_new_element_installs_fresh_listeners() {
    let first = TimeSpan::new(5.0, 10.0).unwrap();
    let second = TimeSpan::new(20.0, 30.0).unwrap();

    let mut element = MediaElement::new(player(true));
    bind_persistent(Some(&first), &mut element).unwrap();
    let handle = element.into_handle();

    let mut element = MediaElement::new(handle);
    bind_persistent(Some(&second), &mut element).unwrap();
    element.handle_mut().play();
    element.handle_mut().set_current_time(31.0);
    element.dispatch(PlaybackEvent::TimeUpdate);

    assert_eq!(element.handle().current_time(), 20.0);
}

#[test]
fn reference_to_simulated_loop() {
    let span = span_from_reference("talk.mp4#t=npt:00:02,00:04").unwrap();
    let mut element = MediaElement::new(player(true));
    bind_persistent(Some(&span), &mut element).unwrap();
    element.handle_mut().play();

    let mut simulation = Simulation::new(element, 1.0);
    let positions: Vec<f64> = simulation.run(6).iter().map(|s| s.position).collect();

    // Snapped from 0 to 2 on "playing", then cycles through 2..=4
    assert_eq!(positions, vec![3.0, 4.0, 2.0, 3.0, 4.0, 2.0]);
}

#[test]
fn embed_resumed_outside_window_is_reanchored() {
    let player = SimulatedPlayer::new("https://media.example.com/a.mp3", 60.0);
    let mut element = MediaElement::new(player);
    prepare_embed("a.mp3#t=30,40", &mut element).unwrap();
    assert_eq!(
        element.handle().source(),
        "https://media.example.com/a.mp3#t=30,40"
    );

    let mut simulation = Simulation::new(element, 1.0);
    simulation.element_mut().handle_mut().play();
    simulation.run(3);
    assert_eq!(simulation.element().handle().current_time(), 33.0);

    // External seek while paused, then resume
    simulation.element_mut().handle_mut().pause();
    simulation.element_mut().handle_mut().set_current_time(55.0);
    simulation.element_mut().handle_mut().play();
    simulation.pump();

    assert_eq!(simulation.element().handle().current_time(), 30.0);
}
