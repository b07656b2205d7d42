//! Seams between the game loop and the platform it runs on

use std::path::Path;

use anyhow::Result;
use cellhop_core::types::{Direction, PixelRect};

use crate::config::Color;

/// Something able to open a window.
pub trait Renderer {
    type Window: Window;

    fn create_window(
        &mut self,
        title: &str,
        width_px: usize,
        height_px: usize,
    ) -> Result<Self::Window>;
}

/// A window owned by the thread running the game loop.
///
/// Drawn rectangles persist on the window surface until painted over; they
/// only become visible on the next [`Window::present`].
pub trait Window {
    fn is_closed(&self) -> bool;
    fn is_pressed(&self, dir: Direction) -> bool;
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
    /// Flushes the drawn rectangles to the screen and pumps pending input events.
    fn present(&mut self) -> Result<()>;
}

pub trait Sound {
    /// Starts playing the sample at `path` and returns without waiting for it.
    /// Only a failure to start playback is reported.
    fn play_async(&self, path: &Path) -> Result<()>;
}
