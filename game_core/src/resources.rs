/// Steering intents, written by input handlers and read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.move_left = false;
        self.move_right = false;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

/// Obstacle spawn cadence with a difficulty ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    pub timer: u32,
    pub interval: u32, // ticks between spawns, shrinks after each spawn
}

impl SpawnTimer {
    pub fn new(interval: u32) -> Self {
        Self { timer: 0, interval }
    }

    /// Advance one tick; true when an obstacle is due
    pub fn tick(&mut self, min_interval: u32) -> bool {
        self.timer += 1;
        if self.timer > self.interval {
            self.timer = 0;
            if self.interval > min_interval {
                self.interval -= 1;
            }
            true
        } else {
            false
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub spawned: bool,
    pub dodged: u32, // obstacles that left the field
    pub survival_bonus: bool,
    pub collided: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.spawned = false;
        self.dodged = 0;
        self.survival_bonus = false;
        self.collided = false;
    }
}
