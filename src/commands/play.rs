//! `tfrag play`: simulate playback with a span bound.

use std::process::ExitCode;

use anyhow::{bail, Result};
use serde_json::json;

use tfrag::cli::BindMode;
use tfrag::embed::{prepare_embed, MediaKind};
use tfrag::npt::format_npt;
use tfrag::player::{bind_once, MediaElement, PlaybackHandle};
use tfrag::sim::{SimulatedPlayer, Simulation};
use tfrag::span::span_from_reference;

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub mode: BindMode,
    pub duration: f64,
    pub tick: f64,
    pub ticks: usize,
    pub looping: bool,
    pub json: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(reference: &str, options: &PlayOptions) -> Result<ExitCode> {
    if !(options.duration.is_finite() && options.duration > 0.0) {
        bail!("--duration must be a positive number of seconds");
    }
    if !(options.tick.is_finite() && options.tick > 0.0) {
        bail!("--tick must be a positive number of seconds");
    }

    let source = reference.split('#').next().unwrap_or(reference);
    let mut player = SimulatedPlayer::new(source, options.duration);
    if options.looping {
        player.set_looping(true);
    }
    let mut element = MediaElement::new(player);

    let span = match options.mode {
        BindMode::Jump => {
            let span = span_from_reference(reference);
            match &span {
                Some(span) => bind_once(span, &mut element),
                None => element.handle_mut().play(),
            }
            span
        }
        BindMode::Embed => {
            let span = prepare_embed(reference, &mut element)?;
            element.handle_mut().play();
            span
        }
    };

    let mut simulation = Simulation::new(element, options.tick);
    simulation.run(options.ticks);

    let handle = simulation.element().handle();
    if options.json {
        let value = json!({
            "mode": format!("{:?}", options.mode).to_lowercase(),
            "source": handle.source(),
            "kind": MediaKind::from_source(handle.source()),
            "duration": handle.duration(),
            "looping": handle.looping(),
            "span": span,
            "trace": simulation.trace(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(ExitCode::SUCCESS);
    }

    match &span {
        Some(span) => println!("span: {} (t={})", span, span.raw()),
        None => println!("span: none"),
    }
    println!("source: {}", handle.source());
    for sample in simulation.trace() {
        println!(
            "{:>5}  {:>10}  {}",
            sample.tick,
            format_npt(sample.position),
            if sample.paused { "paused" } else { "playing" }
        );
    }

    Ok(ExitCode::SUCCESS)
}
