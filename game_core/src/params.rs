/// Game tuning parameters for the lane dodger
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Play field
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const SHOULDER_WIDTH: f32 = 30.0;

    // Player car
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 90.0; // distance from field bottom to car top
    pub const PLAYER_SPEED: f32 = 5.0; // units per tick

    // Obstacle cars (all ranges half-open)
    pub const OBSTACLE_MIN_WIDTH: f32 = 40.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 70.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 60.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 90.0;
    pub const OBSTACLE_MIN_SPEED: f32 = 2.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 4.5;

    // Spawning
    pub const SPAWN_INTERVAL_INITIAL: u32 = 90; // ticks
    pub const SPAWN_INTERVAL_MIN: u32 = 45;

    // Score
    pub const DODGE_SCORE: u32 = 10;
    pub const SURVIVAL_BONUS: u32 = 1;
    pub const SURVIVAL_BONUS_FRAMES: u64 = 60; // ~1 second at 60 Hz
}
