//! Session lifecycle: a single running/ended flag plus the game-over panel seam.

use crate::config::Config;
use crate::world::World;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

/// Game-over overlay owned by the host
pub trait GameOverPanel {
    /// Publish the final score text and reveal the overlay
    fn show(&mut self, score_text: &str);
    fn hide(&mut self);
}

/// Panel that ignores everything, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPanel;

impl GameOverPanel for NoPanel {
    fn show(&mut self, _score_text: &str) {}
    fn hide(&mut self) {}
}

/// Publish the end of a session. The world must already be [`Phase::Ended`].
pub fn end_game(world: &World, config: &Config, panel: &mut impl GameOverPanel) {
    debug_assert_eq!(world.phase, Phase::Ended);
    tracing::info!(score = world.score.points, frames = world.frame_count, "game over");
    panel.show(&config.score_text(world.score.points));
}
