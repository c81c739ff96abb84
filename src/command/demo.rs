//! Terminal demo: animate the indicator while a simulated slow operation runs.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::icons;
use crate::indicator::{MountedIndicator, RunningIndicator};
use crate::skin::{Glyph, Skin};

/// Tick string shown when the spinner finishes
const FINISHED_TICK: &str = "✔";

pub fn run(config: &Config, skin: Option<Skin>, seconds: u64) -> Result<()> {
    let skin = config.resolve_skin(skin)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(simulate(config, skin, Duration::from_secs(seconds)))
}

async fn simulate(config: &Config, skin: Skin, duration: Duration) -> Result<()> {
    let indicator = RunningIndicator::new(skin, &config.theme);
    let mounted = indicator.mount()?;
    info!(skin = %skin, duration_ms = duration.as_millis() as u64, "demo:start");

    let pb = ProgressBar::new_spinner().with_message("Working...");
    let work = tokio::time::sleep(duration);

    if indicator.glyph().schedule().is_some() {
        pb.set_style(ProgressStyle::with_template("{prefix} {msg}")?);
        pb.set_prefix(phase_icon(indicator.glyph(), mounted.phase()));
        follow_phase(&pb, &mounted, indicator.glyph(), work).await;
    } else {
        let frames = indicator.glyph().terminal_frames();
        let ticks: Vec<&str> = frames
            .frames
            .iter()
            .copied()
            .chain([FINISHED_TICK])
            .collect();
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?.tick_strings(&ticks));
        pb.enable_steady_tick(frames.interval);
        work.await;
    }

    mounted.unmount();
    pb.finish_and_clear();
    println!("{}", style(format!("{} Done!", FINISHED_TICK)).green());
    info!(skin = %skin, "demo:done");
    Ok(())
}

/// Redraw on every phase change until the work completes.
async fn follow_phase(
    pb: &ProgressBar,
    mounted: &MountedIndicator,
    glyph: &dyn Glyph,
    work: tokio::time::Sleep,
) {
    tokio::pin!(work);
    let mut phase_rx = mounted.subscribe();
    loop {
        tokio::select! {
            _ = &mut work => break,
            changed = phase_rx.changed() => {
                if changed.is_err() {
                    (&mut work).await;
                    break;
                }
                let phase = *phase_rx.borrow_and_update();
                pb.set_prefix(phase_icon(glyph, phase));
            }
        }
    }
}

/// Terminal glyph for a phase: the icon font glyph if known, else the
/// skin's own terminal frame.
fn phase_icon(glyph: &dyn Glyph, phase: usize) -> String {
    let names = glyph.icon_names();
    let frames = glyph.terminal_frames().frames;
    names
        .get(phase % names.len().max(1))
        .and_then(|name| icons::terminal_icon(name))
        .unwrap_or(frames[phase % frames.len()])
        .to_string()
}
