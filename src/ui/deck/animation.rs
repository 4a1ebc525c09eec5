//! Time-driven tweens and springs for card offsets.
//!
//! Both animations are sampled with an explicit `Instant`, never a wall clock
//! read of their own, so the host event loop decides the frame rate and tests
//! can step time deterministically.

use std::time::{Duration, Instant};

use super::geometry::Offset;

/// Default duration of the fly-out animation after a committed swipe.
pub const SWIPE_OUT_DURATION: Duration = Duration::from_millis(250);

/// Springs come to rest once both displacement and speed drop below these.
pub const REST_DISPLACEMENT_THRESHOLD: f32 = 0.001;
pub const REST_SPEED_THRESHOLD: f32 = 0.001;

/// Longest a spring may run. A barely damped spring is snapped onto its
/// target here so the gesture cycle always returns to idle.
pub const SPRING_SETTLE_LIMIT: Duration = Duration::from_secs(3);

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Symmetric ease-in-out built from the `(0.42, 0, 1, 1)` cubic bezier.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

fn ease(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 1.0, 1.0, t)
}

/// Evaluate a CSS-style cubic bezier timing curve at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve_x = |s: f32| ((ax * s + bx) * s + cx) * s;
    let slope_x = |s: f32| (3.0 * ax * s + 2.0 * bx) * s + cx;

    // Newton first, bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = curve_x(s) - x;
        if err.abs() < 1e-6 {
            return ((ay * s + by) * s + cy) * s;
        }
        let slope = slope_x(s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = curve_x(s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    ((ay * s + by) * s + cy) * s
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub offset: Offset,
    pub finished: bool,
}

/// Constant-duration tween between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Offset,
    pub to: Offset,
    pub duration: Duration,
    pub easing: Easing,
    pub started: Instant,
}

impl Tween {
    pub fn new(from: Offset, to: Offset, duration: Duration, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
            started,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn sample(&self, now: Instant) -> AnimationFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return AnimationFrame {
                offset: self.to,
                finished: true,
            };
        }
        AnimationFrame {
            offset: self.from.lerp(self.to, self.easing.apply(progress)),
            finished: false,
        }
    }
}

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Damping ratio; below 1 the spring overshoots before settling.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Normalized displacement and velocity at `t` seconds for a spring
    /// released from rest at unit distance from its target.
    ///
    /// Ratios at or above 1 settle along the critically damped curve.
    fn unit_response(&self, t: f32) -> (f32, f32) {
        let zeta = self.damping_ratio();
        let omega0 = self.natural_frequency();

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin, cos) = (omega1 * t).sin_cos();
            let displacement = envelope * (zeta * omega0 / omega1 * sin + cos);
            let velocity = -envelope * sin * omega0 * omega0 / omega1;
            (displacement, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let displacement = envelope * (1.0 + omega0 * t);
            let velocity = -omega0 * omega0 * t * envelope;
            (displacement, velocity)
        }
    }
}

/// Damped spring pulling an offset toward a target, released from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub from: Offset,
    pub to: Offset,
    pub config: SpringConfig,
    pub started: Instant,
}

impl Spring {
    pub fn new(from: Offset, to: Offset, config: SpringConfig, started: Instant) -> Self {
        Self {
            from,
            to,
            config,
            started,
        }
    }

    pub fn sample(&self, now: Instant) -> AnimationFrame {
        let distance = Offset::new(self.from.x - self.to.x, self.from.y - self.to.y);
        let magnitude = distance.max_abs();
        if magnitude == 0.0 {
            return AnimationFrame {
                offset: self.to,
                finished: true,
            };
        }

        let elapsed = now.saturating_duration_since(self.started);
        let (displacement, velocity) = self.config.unit_response(elapsed.as_secs_f32());
        let at_rest = (displacement * magnitude).abs() <= REST_DISPLACEMENT_THRESHOLD
            && (velocity * magnitude).abs() <= REST_SPEED_THRESHOLD;
        if at_rest || elapsed >= SPRING_SETTLE_LIMIT {
            return AnimationFrame {
                offset: self.to,
                finished: true,
            };
        }

        AnimationFrame {
            offset: Offset::new(
                self.to.x + distance.x * displacement,
                self.to.y + distance.y * displacement,
            ),
            finished: false,
        }
    }
}
