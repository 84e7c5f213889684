use std::time::Duration;

use rand::Rng;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::models::MenuItem;
use crate::wheel::constants::{FULL_TURN_DEGREES, MAX_SEGMENTS, MIN_SPIN_DEGREES};
use crate::wheel::geometry::{build_segments, resolve_winner, WheelSegment};
use crate::wheel::sampling::sample_display_items;

/// Result of one spin, consumed once by the state machine.
#[derive(Debug, Clone)]
pub struct SpinOutcome {
    /// Cumulative rotation in degrees, monotonically increasing across
    /// spins of one session.
    pub total_rotation_degrees: f64,

    pub winning_segment_index: usize,

    pub winning_item: MenuItem,
}

/// The wheel: a fixed display subset plus the running rotation total.
///
/// The subset is resampled only when the active item list changes (via
/// [`Wheel::reload`]), never between spins, so repeated spins of the same
/// filter always resolve within the same displayed items.
#[derive(Debug, Default)]
pub struct Wheel {
    segments: Vec<WheelSegment>,
    cumulative_rotation: f64,
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resample the display subset from `items` and rebuild segments.
    ///
    /// Must not be called between spin start and spin resolution; the
    /// session's Idle-only filter guard enforces that.
    pub fn reload<R: Rng>(&mut self, rng: &mut R, items: &[MenuItem]) {
        let subset = sample_display_items(rng, items, MAX_SEGMENTS);
        self.segments = build_segments(&subset);
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current resting rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    /// Advance the rotation and compute the winner.
    ///
    /// Returns `None` when no segments are loaded. The winner is computed
    /// immediately; callers defer announcing it via [`SpinHandle`].
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Option<SpinOutcome> {
        if self.segments.is_empty() {
            return None;
        }

        let extra = rng.gen_range(0.0..FULL_TURN_DEGREES);
        let next_rotation = self.cumulative_rotation + MIN_SPIN_DEGREES + extra;
        self.cumulative_rotation = next_rotation;

        let index = resolve_winner(next_rotation, self.segments.len());
        Some(SpinOutcome {
            total_rotation_degrees: next_rotation,
            winning_segment_index: index,
            winning_item: self.segments[index].item.clone(),
        })
    }
}

/// A pending spin: the outcome is known, but is only released after the
/// animation delay elapses.
///
/// Single-fire and cancellable. Aborting the timer task guarantees a
/// superseded spin can never deliver a stale outcome.
#[derive(Debug)]
pub struct SpinHandle {
    rx: oneshot::Receiver<SpinOutcome>,
    task: JoinHandle<()>,
}

impl SpinHandle {
    /// Start the animation timer for an already-computed outcome.
    pub fn start(outcome: SpinOutcome, delay: Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(outcome);
        });
        Self { rx, task }
    }

    /// Wait for the animation to finish and take the outcome.
    ///
    /// Returns `None` if the handle was cancelled.
    pub async fn resolve(self) -> Option<SpinOutcome> {
        self.rx.await.ok()
    }

    /// Invalidate the pending notification.
    pub fn cancel(self) {
        self.task.abort();
    }
}
