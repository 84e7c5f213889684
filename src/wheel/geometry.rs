use crate::models::MenuItem;
use crate::wheel::constants::{FULL_TURN_DEGREES, PALETTE_SIZE};

/// One wheel slice bound to one menu item.
///
/// A display-time projection: rebuilt whenever the active subset changes,
/// never persisted.
#[derive(Debug, Clone)]
pub struct WheelSegment {
    pub item: MenuItem,

    /// Start angle in degrees, clockwise from the top pointer.
    pub angle_start: f64,

    /// Angular span in degrees (360 / segment count).
    pub angle_span: f64,

    pub color_index: usize,
}

/// Lay out segments for the given items.
///
/// Segment `i` starts at `i * 360/n` degrees clockwise from the pointer.
pub fn build_segments(items: &[MenuItem]) -> Vec<WheelSegment> {
    let count = items.len();
    if count == 0 {
        return Vec::new();
    }

    let span = FULL_TURN_DEGREES / count as f64;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| WheelSegment {
            item: item.clone(),
            angle_start: i as f64 * span,
            angle_span: span,
            color_index: i % PALETTE_SIZE,
        })
        .collect()
}

/// Map a cumulative rotation to the winning segment index.
///
/// The wheel rotates clockwise under a fixed top pointer, so the aligned
/// segment is found by measuring counter-clockwise from 0°. The result is
/// clamped into `[0, n-1]`: floating point can put the relative angle at
/// exactly 360°, which would otherwise index one past the end.
pub fn resolve_winner(total_rotation: f64, segment_count: usize) -> usize {
    debug_assert!(segment_count > 0);

    let final_angle = total_rotation.rem_euclid(FULL_TURN_DEGREES);
    let pointer_relative = (FULL_TURN_DEGREES - final_angle).rem_euclid(FULL_TURN_DEGREES);
    let span = FULL_TURN_DEGREES / segment_count as f64;

    let index = (pointer_relative / span).floor() as usize;
    index.min(segment_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_menu;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_build_segments_geometry() {
        let items: Vec<_> = builtin_menu().into_iter().take(12).collect();
        let segments = build_segments(&items);

        assert_eq!(segments.len(), 12);
        for (i, segment) in segments.iter().enumerate() {
            assert_float_absolute_eq!(segment.angle_span, 30.0);
            assert_float_absolute_eq!(segment.angle_start, i as f64 * 30.0);
            assert_eq!(segment.color_index, i % PALETTE_SIZE);
        }
    }

    #[test]
    fn test_build_segments_empty() {
        assert!(build_segments(&[]).is_empty());
    }

    #[test]
    fn test_resolve_winner_at_rest() {
        // No rotation: pointer sits on segment 0.
        assert_eq!(resolve_winner(0.0, 12), 0);
        // Full revolutions land back on segment 0.
        assert_eq!(resolve_winner(1440.0, 12), 0);
    }

    #[test]
    fn test_resolve_winner_quarter_turn() {
        // 90° clockwise moves the pointer 270° counter-clockwise into the
        // wheel, which is segment 9 of 12 (270 / 30).
        assert_eq!(resolve_winner(90.0, 12), 9);
        assert_eq!(resolve_winner(1440.0 + 90.0, 12), 9);
    }

    #[test]
    fn test_resolve_winner_always_in_range() {
        for n in 1..=12 {
            let mut rotation = 0.0;
            while rotation < 7200.0 {
                let index = resolve_winner(rotation, n);
                assert!(index < n, "rotation {rotation} n {n} gave {index}");
                rotation += 0.37;
            }
        }
    }

    #[test]
    fn test_resolve_winner_boundary_clamped() {
        // A rotation a hair past a whole revolution can make the
        // pointer-relative angle round to exactly 360.
        for n in [1, 3, 7, 12] {
            let index = resolve_winner(360.0 + 1e-13, n);
            assert!(index < n);
            let index = resolve_winner(f64::MIN_POSITIVE, n);
            assert!(index < n);
        }
    }
}
