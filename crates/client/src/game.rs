use std::{path::Path, thread::sleep};

use anyhow::{Context, Result};
use cellhop_core::types::{Direction, GridPosition};
use log::{debug, info};

use crate::{
    adapter::{Renderer, Sound, Window},
    config::{Color, Config},
};

/// Opens the window and runs the game until it is closed.
///
/// Fails without entering the loop if the window cannot be created, and stops
/// the loop as soon as a sound cue cannot be launched.
pub fn run<R: Renderer, S: Sound>(config: &Config, renderer: &mut R, sound: S) -> Result<()> {
    let grid = &config.grid;
    let window = renderer
        .create_window(config.title, grid.width_px, grid.height_px)
        .context("could not create window")?;
    info!(
        "Window created: {}x{} px, {}x{} cells",
        grid.width_px, grid.height_px, grid.num_x, grid.num_y
    );

    GameLoop::new(config, window, sound).run()
}

pub struct GameLoop<'a, W, S> {
    config: &'a Config,
    window: W,
    sound: S,
    position: GridPosition,
}

impl<'a, W: Window, S: Sound> GameLoop<'a, W, S> {
    pub fn new(config: &'a Config, window: W, sound: S) -> Self {
        Self {
            config,
            window,
            sound,
            position: GridPosition::default(),
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn run(&mut self) -> Result<()> {
        self.draw(self.position, self.config.foreground);

        while !self.window.is_closed() {
            self.frame()?;
            self.window.present()?;
            sleep(self.config.frame_delay);
        }

        info!("Window closed at {}", self.position);
        Ok(())
    }

    /// Moves once for every pressed direction. Returns the number of moves.
    pub fn frame(&mut self) -> Result<usize> {
        let mut moves = 0;
        for dir in Direction::ALL {
            if self.window.is_pressed(dir) {
                self.step(dir)?;
                moves += 1;
            }
        }
        Ok(moves)
    }

    fn step(&mut self, dir: Direction) -> Result<()> {
        self.draw(self.position, self.config.background);
        let next = self.position.move_once(dir, &self.config.grid);
        self.draw(next, self.config.foreground);

        self.sound
            .play_async(Path::new(self.config.sound_path))
            .context("could not launch sound player")?;

        debug!("{dir:?}: {} -> {next}", self.position);
        self.position = next;
        Ok(())
    }

    fn draw(&mut self, pos: GridPosition, color: Color) {
        let rect = self.config.grid.cell_rect(pos);
        self.window.fill_rect(rect, color);
    }
}
