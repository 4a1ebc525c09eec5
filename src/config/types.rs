use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::deck::{DeckMetrics, SpringConfig, SWIPE_OUT_DURATION};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_cards")]
    pub cards: Vec<CardSpec>,
}

/// Animation tuning for the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Duration of the fly-out after a committed swipe (default: 250).
    #[serde(default = "default_swipe_out_ms")]
    pub swipe_out_ms: u64,
    /// Rows between consecutive queued cards (default: 1).
    #[serde(default = "default_cascade_step")]
    pub cascade_step: f32,
    /// Spring stiffness for the snap-back (default: 230.2).
    #[serde(default = "default_spring_stiffness")]
    pub spring_stiffness: f32,
    /// Spring damping for the snap-back (default: 22).
    #[serde(default = "default_spring_damping")]
    pub spring_damping: f32,
    /// Spring mass for the snap-back (default: 1).
    #[serde(default = "default_spring_mass")]
    pub spring_mass: f32,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame interval in milliseconds (default: 16).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Card width in columns (default: 36).
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Card height in rows (default: 12).
    #[serde(default = "default_card_height")]
    pub card_height: u16,
}

/// One card as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Stable key; a random one is assigned when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn default_swipe_out_ms() -> u64 {
    SWIPE_OUT_DURATION.as_millis() as u64
}

fn default_cascade_step() -> f32 {
    1.0
}

fn default_spring_stiffness() -> f32 {
    SpringConfig::default().stiffness
}

fn default_spring_damping() -> f32 {
    SpringConfig::default().damping
}

fn default_spring_mass() -> f32 {
    SpringConfig::default().mass
}

fn default_tick_ms() -> u64 {
    16
}

fn default_card_width() -> u16 {
    36
}

fn default_card_height() -> u16 {
    12
}

fn default_cards() -> Vec<CardSpec> {
    [
        ("Ferris", "Crab. Unsafe-averse. Likes long walks on the borrow checker."),
        ("Tux", "Penguin. Runs on everything, including toasters."),
        ("Gopher", "Burrows fast. Garbage collected."),
        ("Duke", "Has opinions about checked exceptions."),
        ("Octocat", "Half cat, half octopus, fully versioned."),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, body))| CardSpec {
        id: Some(format!("sample-{}", idx + 1)),
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

impl DeckConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.spring_stiffness,
            damping: self.spring_damping,
            mass: self.spring_mass,
        }
    }

    pub fn swipe_out(&self) -> Duration {
        Duration::from_millis(self.swipe_out_ms)
    }

    /// Deck metrics for a screen `screen_width` columns wide.
    pub fn metrics(&self, screen_width: f32) -> DeckMetrics {
        DeckMetrics::new(screen_width)
            .with_cascade_step(self.cascade_step)
            .with_swipe_out(self.swipe_out())
            .with_spring(self.spring())
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_out_ms: default_swipe_out_ms(),
            cascade_step: default_cascade_step(),
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
            spring_mass: default_spring_mass(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            card_width: default_card_width(),
            card_height: default_card_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: DeckConfig::default(),
            ui: UiConfig::default(),
            cards: default_cards(),
        }
    }
}
