//! Frame-by-frame sampling of timelines and easing curves

use std::fmt::Write as _;

use anyhow::{bail, Result};
use flip_animation::{Easing, Timeline};

/// Upper bound on rows produced by one [`sample_timeline`] call
pub const MAX_FRAMES: u32 = 100_000;

/// Values of the requested ids at one clock reading
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub clock: f64,
    pub values: Vec<Option<f64>>,
}

/// Distinct animation ids in append order
pub fn timeline_ids(timeline: &Timeline) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for animation in timeline.animations() {
        if !ids.iter().any(|id| id == animation.id()) {
            ids.push(animation.id().to_string());
        }
    }
    ids
}

/// Reject frame grids that are non-finite, never advance, or exceed
/// [`MAX_FRAMES`]
pub fn check_grid(step: f64, until: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        bail!("--step must be a positive number of milliseconds, got {step}");
    }
    if !until.is_finite() {
        bail!("--until must be finite, got {until}");
    }
    if (until / step).floor() >= f64::from(MAX_FRAMES) {
        bail!("sampling every {step} ms through {until} ms exceeds {MAX_FRAMES} frames");
    }
    Ok(())
}

/// Play `timeline` at clock 0 and read `ids` every `step` ms through `until`
pub fn sample_timeline(
    timeline: &mut Timeline,
    ids: &[String],
    step: f64,
    until: f64,
) -> Result<Vec<SampleRow>> {
    check_grid(step, until)?;
    let mut rows = Vec::new();
    timeline.play_at(0.0);

    let mut frame = 0u32;
    loop {
        // Multiply rather than accumulate so long runs stay on the grid
        let clock = f64::from(frame) * step;
        if clock > until {
            break;
        }
        timeline.evaluate(clock);
        rows.push(SampleRow {
            clock,
            values: ids.iter().map(|id| timeline.value_of(id)).collect(),
        });
        frame += 1;
    }
    Ok(rows)
}

/// Render rows as a whitespace-aligned table, `-` marking absent values
pub fn format_table(ids: &[String], rows: &[SampleRow]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>10}", "clock");
    for id in ids {
        let _ = write!(out, " {:>12}", id);
    }
    out.push('\n');

    for row in rows {
        let _ = write!(out, "{:>10.1}", row.clock);
        for value in &row.values {
            match value {
                Some(v) => {
                    let _ = write!(out, " {:>12.4}", v);
                }
                None => {
                    let _ = write!(out, " {:>12}", "-");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Every catalog curve sampled at `steps + 1` evenly spaced points
pub fn format_easings(steps: u32) -> String {
    let steps = steps.max(1);
    let mut out = String::new();
    for easing in Easing::ALL {
        let _ = write!(out, "{:<10}", easing.name());
        for i in 0..=steps {
            let x = f64::from(i) / f64::from(steps);
            let _ = write!(out, " {:>7.3}", easing.apply(x));
        }
        out.push('\n');
    }
    out
}
