//! Application settings. Everything is compiled in.

use std::time::Duration;

use cellhop_core::config::GridConfig;
use palette::{Srgb, named};

pub type Color = Srgb<u8>;

#[derive(Debug, Clone)]
pub struct Config {
    pub title: &'static str,
    pub grid: GridConfig,
    /// Pause between two frames, whatever happened during the frame
    pub frame_delay: Duration,
    pub background: Color,
    pub foreground: Color,
    /// External program playing the cue, called with the sample path as only argument
    pub sound_player: &'static str,
    pub sound_path: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Cell Hop",
            grid: GridConfig::DEFAULT,
            frame_delay: Duration::from_millis(25),
            background: named::BLACK,
            foreground: named::WHITE,
            sound_player: "paplay",
            sound_path: "./resources/sample.wav",
        }
    }
}
