use std::time::Duration;

/// Maximum number of segments shown on the wheel at once.
pub const MAX_SEGMENTS: usize = 12;

/// One full revolution, in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Minimum extra rotation per spin (4 full revolutions), so repeated
/// spins always visibly move forward from the previous resting position.
pub const MIN_SPIN_DEGREES: f64 = 1440.0;

/// Fixed spin animation duration; the winner is announced only after
/// this much time has elapsed.
pub const SPIN_DURATION: Duration = Duration::from_millis(4000);

/// Number of distinct segment colours before the palette repeats.
pub const PALETTE_SIZE: usize = 12;
