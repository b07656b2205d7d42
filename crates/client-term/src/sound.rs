use std::{
    path::Path,
    process::{Command, Stdio},
    thread::spawn,
};

use anyhow::{Context, Result};
use cellhop_client::adapter::Sound;
use log::{debug, error, warn};

/// Plays cues by running an external player, e.g. `paplay <sample>`.
///
/// The player process is handed to a detached thread that only waits for it to
/// exit. Nothing keeps track of it afterwards.
pub struct ProcessSound {
    player: String,
}

impl ProcessSound {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
        }
    }
}

impl Sound for ProcessSound {
    fn play_async(&self, path: &Path) -> Result<()> {
        let mut child = Command::new(&self.player)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("could not run {} {}", self.player, path.display()))?;
        debug!("{} started (pid {})", self.player, child.id());

        let player = self.player.clone();
        spawn(move || match child.wait() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("{player} exited with {status}"),
            Err(e) => error!("Could not wait for {player}: {e}"),
        });
        Ok(())
    }
}
