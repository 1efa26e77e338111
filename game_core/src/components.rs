use glam::Vec2;

use crate::config::Config;

pub const PLAYER_COLOR: &str = "#2619b5";
pub const OBSTACLE_COLOR: &str = "#c62828";

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// The car steered by the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: Rect,
    pub speed: f32, // lateral units per tick
    pub color: &'static str,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            body: Rect::new(
                config.player_start_x(),
                config.player_y(),
                config.player_width,
                config.player_height,
            ),
            speed: config.player_speed,
            color: PLAYER_COLOR,
        }
    }

    pub fn x(&self) -> f32 {
        self.body.pos.x
    }

    /// Put the car back in the middle of the road
    pub fn recenter(&mut self, config: &Config) {
        self.body.pos.x = config.player_start_x();
    }
}

/// A car falling down the road toward the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub body: Rect,
    pub speed: f32, // downward units per tick
    pub color: &'static str,
}

impl Obstacle {
    /// Obstacle with its bottom edge resting on the top of the field
    pub fn above_field(x: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            body: Rect::new(x, -height, width, height),
            speed,
            color: OBSTACLE_COLOR,
        }
    }

    /// Past the bottom edge of the field
    pub fn is_off_field(&self, field_height: f32) -> bool {
        self.body.pos.y > field_height
    }
}
