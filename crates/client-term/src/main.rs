use anyhow::Result;
use cellhop_client::config::Config;

use crate::{crossterm_adapter::CrosstermRenderer, sound::ProcessSound};

mod crossterm_adapter;
mod sound;
mod surface;

fn main() -> Result<()> {
    tui_logger::init_logger(log::LevelFilter::Debug).unwrap();
    tui_logger::set_default_level(log::LevelFilter::Debug);

    let config = Config::default();
    let mut renderer = CrosstermRenderer::new(config.background);
    let sound = ProcessSound::new(config.sound_player);

    cellhop_client::run(&config, &mut renderer, sound)
}
