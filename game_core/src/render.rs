//! Frame drawing against an abstract immediate-mode 2D surface.

use glam::Vec2;

use crate::{Config, Obstacle, Params, Player, World};

pub const ROAD_COLOR: &str = "#3e3e3e";
pub const SHOULDER_COLOR: &str = "#606060";
pub const LANE_MARK_COLOR: &str = "#f5f5f5";
pub const HUD_COLOR: &str = "#fff";
pub const HUD_FONT: &str = "18px Arial";
pub const WINDOW_TINT: &str = "rgba(255,255,255,0.25)";
pub const GLOSS_TINT: &str = "rgba(255,255,255,0.08)";

pub const LANE_MARK_WIDTH: f32 = 4.0;
pub const LANE_MARK_DASH: [f32; 2] = [20.0, 18.0]; // dash, gap

/// Drawing operations the game needs from its host
pub trait Surface2d {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    /// Stroke a straight dashed line; the dash pattern must not leak into later strokes
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], width: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw the whole frame. Reads the world, never mutates it.
pub fn render(world: &World, config: &Config, surface: &mut impl Surface2d) {
    draw_road(config, surface);
    surface.fill_text(
        &config.score_text(world.score.points),
        12.0,
        24.0,
        HUD_FONT,
        HUD_COLOR,
    );
    draw_player(&world.player, surface);
    for obstacle in &world.obstacles {
        draw_obstacle(obstacle, surface);
    }
}

fn draw_road(config: &Config, surface: &mut impl Surface2d) {
    let (w, h) = (config.field_width, config.field_height);
    let shoulder = Params::SHOULDER_WIDTH;

    surface.clear_rect(0.0, 0.0, w, h);
    surface.fill_rect(shoulder, 0.0, w - 2.0 * shoulder, h, ROAD_COLOR);
    surface.stroke_dashed_line(
        Vec2::new(w / 2.0, 0.0),
        Vec2::new(w / 2.0, h),
        &LANE_MARK_DASH,
        LANE_MARK_WIDTH,
        LANE_MARK_COLOR,
    );
    surface.fill_rect(0.0, 0.0, shoulder, h, SHOULDER_COLOR);
    surface.fill_rect(w - shoulder, 0.0, shoulder, h, SHOULDER_COLOR);
}

fn draw_player(player: &Player, surface: &mut impl Surface2d) {
    let b = player.body;
    surface.fill_rect(b.left(), b.top(), b.width(), b.height(), player.color);
    // Windshield
    surface.fill_rect(b.left() + 6.0, b.top() + 12.0, b.width() - 12.0, 18.0, WINDOW_TINT);
}

fn draw_obstacle(obstacle: &Obstacle, surface: &mut impl Surface2d) {
    let b = obstacle.body;
    surface.fill_rect(b.left(), b.top(), b.width(), b.height(), obstacle.color);
    surface.fill_rect(b.left() + 6.0, b.top() + 8.0, b.width() - 12.0, 12.0, GLOSS_TINT);
}
