//! Game loop of the sprite, independent of how windows and sounds are provided.

pub mod adapter;
pub mod config;
pub mod game;

pub use game::run;
