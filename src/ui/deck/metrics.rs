use std::time::Duration;

use super::animation::{SpringConfig, SWIPE_OUT_DURATION};
use super::geometry::swipe_threshold;

/// Rows/pixels between consecutive queued cards.
pub const DEFAULT_CASCADE_STEP: f32 = 10.0;

/// Display measurements and animation tuning, fixed for the life of a deck.
///
/// The screen width is read once when the deck is built. Later resizes do
/// not move the swipe threshold or the fly-out distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckMetrics {
    pub screen_width: f32,
    pub cascade_step: f32,
    pub swipe_out: Duration,
    pub spring: SpringConfig,
}

impl DeckMetrics {
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            ..Self::default()
        }
    }

    pub fn with_cascade_step(mut self, cascade_step: f32) -> Self {
        self.cascade_step = cascade_step;
        self
    }

    pub fn with_swipe_out(mut self, swipe_out: Duration) -> Self {
        self.swipe_out = swipe_out;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn swipe_threshold(&self) -> f32 {
        swipe_threshold(self.screen_width)
    }
}

impl Default for DeckMetrics {
    fn default() -> Self {
        Self {
            screen_width: 0.0,
            cascade_step: DEFAULT_CASCADE_STEP,
            swipe_out: SWIPE_OUT_DURATION,
            spring: SpringConfig::default(),
        }
    }
}
