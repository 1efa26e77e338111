use rand::Rng;

use crate::{Config, Events, GameRng, Obstacle, World};

/// Build a random obstacle just above the field
pub fn create_obstacle(config: &Config, rng: &mut GameRng) -> Obstacle {
    let width = rng
        .0
        .gen_range(config.obstacle_min_width..config.obstacle_max_width);
    let height = rng
        .0
        .gen_range(config.obstacle_min_height..config.obstacle_max_height);
    // width < max_width <= field_width, so the range is never empty
    let x = rng.0.gen_range(0.0..config.field_width - width);
    let speed = rng
        .0
        .gen_range(config.obstacle_min_speed..config.obstacle_max_speed);
    Obstacle::above_field(x, width, height, speed)
}

/// Advance the spawn timer and append an obstacle when one is due
pub fn spawn_obstacles(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    if !world.spawn.tick(config.spawn_interval_min) {
        return;
    }

    let obstacle = create_obstacle(config, rng);
    tracing::trace!(
        x = obstacle.body.pos.x,
        width = obstacle.body.size.x,
        speed = obstacle.speed,
        next_interval = world.spawn.interval,
        "obstacle spawned"
    );
    world.obstacles.push(obstacle);
    events.spawned = true;
}
