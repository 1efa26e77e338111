pub mod components;
pub mod config;
pub mod engine;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use world::*;

use systems::*;

/// Run one tick of the lane dodger simulation.
///
/// Order matters: steer, spawn, move obstacles (which may end the session),
/// then the survival bonus. A collision ends the tick on the spot.
pub fn step(
    world: &mut World,
    input: &InputState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    if !world.is_running() {
        return;
    }

    // 1. Steer the player car
    move_player(&mut world.player, input, config);

    // 2. Spawn new traffic (difficulty ramps with each spawn)
    spawn_obstacles(world, config, rng, events);

    // 3. Move traffic, score dodges, detect a crash
    if advance_obstacles(world, config, events) == ObstaclePass::Collided {
        world.end();
        return;
    }

    // 4. Time survival bonus
    award_survival_bonus(world, config, events);
}
