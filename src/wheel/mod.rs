pub mod constants;
mod geometry;
mod sampling;
mod spin;

pub use constants::*;
pub use geometry::{build_segments, resolve_winner, WheelSegment};
pub use sampling::sample_display_items;
pub use spin::{SpinHandle, SpinOutcome, Wheel};
