use crate::components::{Obstacle, Player};
use crate::config::Config;
use crate::resources::{Score, SpawnTimer};
use crate::session::Phase;

/// All mutable game state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub player: Player,
    pub obstacles: Vec<Obstacle>, // insertion order, oldest first
    pub spawn: SpawnTimer,
    pub score: Score,
    pub frame_count: u64,
    pub phase: Phase,
}

impl World {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Player::new(config),
            obstacles: Vec::new(),
            spawn: SpawnTimer::new(config.spawn_interval_initial),
            score: Score::new(),
            frame_count: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Running -> Ended. Returns false if the session had already ended.
    pub fn end(&mut self) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }
        self.phase = Phase::Ended;
        true
    }

    /// Reinitialize every mutable field; the player is recentered, not recreated
    pub fn reset(&mut self, config: &Config) {
        self.obstacles.clear();
        self.spawn = SpawnTimer::new(config.spawn_interval_initial);
        self.score = Score::new();
        self.frame_count = 0;
        self.player.recenter(config);
        self.phase = Phase::Running;
    }
}
