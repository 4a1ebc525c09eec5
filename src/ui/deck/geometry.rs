//! Offsets, swipe classification and the rotation curve of the top card.

/// Fraction of the screen width a drag must exceed to commit a swipe.
pub const SWIPE_THRESHOLD_RATIO: f32 = 0.25;

/// The rotation curve reaches its extremes at this multiple of the screen width.
pub const ROTATION_DOMAIN_RATIO: f32 = 1.5;

/// Rotation at the edges of the rotation domain, in degrees.
pub const MAX_ROTATION_DEG: f32 = 120.0;

/// 2D displacement of a card from its rest position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Linear blend between `self` (t = 0) and `to` (t = 1).
    pub fn lerp(self, to: Offset, t: f32) -> Offset {
        Offset {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f32 {
        self.x.abs().max(self.y.abs())
    }
}

/// Horizontal direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the off-screen travel along x.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Result of classifying a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Commit(SwipeDirection),
    Cancel,
}

/// Horizontal distance a drag must strictly exceed to commit.
pub fn swipe_threshold(screen_width: f32) -> f32 {
    SWIPE_THRESHOLD_RATIO * screen_width
}

/// Classify a released drag by its horizontal travel.
///
/// Commits require strictly exceeding the threshold; a drag that lands
/// exactly on it springs back. Vertical travel never commits.
pub fn classify(dx: f32, threshold: f32) -> SwipeOutcome {
    if dx > threshold {
        SwipeOutcome::Commit(SwipeDirection::Right)
    } else if dx < -threshold {
        SwipeOutcome::Commit(SwipeDirection::Left)
    } else {
        SwipeOutcome::Cancel
    }
}

/// Piecewise-linear interpolation over a three-point domain, clamped at both ends.
pub fn interpolate(input: f32, domain: [f32; 3], range: [f32; 3]) -> f32 {
    if input <= domain[0] {
        return range[0];
    }
    if input >= domain[2] {
        return range[2];
    }

    let segment = if input < domain[1] { 0 } else { 1 };
    let (d0, d1) = (domain[segment], domain[segment + 1]);
    let (r0, r1) = (range[segment], range[segment + 1]);
    let span = d1 - d0;
    if span <= 0.0 {
        return r1;
    }
    r0 + (input - d0) / span * (r1 - r0)
}

/// Rotation of the top card, in degrees, for a horizontal offset.
pub fn rotation_for(offset_x: f32, screen_width: f32) -> f32 {
    let edge = ROTATION_DOMAIN_RATIO * screen_width;
    interpolate(
        offset_x,
        [-edge, 0.0, edge],
        [-MAX_ROTATION_DEG, 0.0, MAX_ROTATION_DEG],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_strict_threshold() {
        assert_eq!(classify(100.0, 100.0), SwipeOutcome::Cancel);
        assert_eq!(classify(-100.0, 100.0), SwipeOutcome::Cancel);
        assert_eq!(
            classify(100.5, 100.0),
            SwipeOutcome::Commit(SwipeDirection::Right)
        );
        assert_eq!(
            classify(-100.5, 100.0),
            SwipeOutcome::Commit(SwipeDirection::Left)
        );
        assert_eq!(classify(0.0, 100.0), SwipeOutcome::Cancel);
    }

    #[test]
    fn threshold_is_quarter_of_width() {
        assert_eq!(swipe_threshold(400.0), 100.0);
    }

    #[test]
    fn rotation_hits_key_points() {
        assert_eq!(rotation_for(0.0, 400.0), 0.0);
        assert_eq!(rotation_for(600.0, 400.0), 120.0);
        assert_eq!(rotation_for(-600.0, 400.0), -120.0);
        assert_eq!(rotation_for(300.0, 400.0), 60.0);
    }

    #[test]
    fn rotation_clamps_outside_domain() {
        assert_eq!(rotation_for(5_000.0, 400.0), 120.0);
        assert_eq!(rotation_for(-5_000.0, 400.0), -120.0);
    }

    #[test]
    fn interpolate_handles_degenerate_domain() {
        assert_eq!(interpolate(0.0, [0.0, 0.0, 0.0], [-1.0, 0.0, 1.0]), -1.0);
        assert_eq!(interpolate(1.0, [0.0, 0.0, 0.0], [-1.0, 0.0, 1.0]), 1.0);
    }

    #[test]
    fn lerp_blends_components() {
        let from = Offset::new(10.0, -4.0);
        let to = Offset::new(30.0, 0.0);
        assert_eq!(from.lerp(to, 0.5), Offset::new(20.0, -2.0));
        assert_eq!(from.lerp(to, 1.0), to);
    }
}
