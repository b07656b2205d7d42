//! Grid model of the sprite: where it is and how it moves.

pub mod config;
pub mod types;
