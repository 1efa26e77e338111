use crate::systems::collision::is_colliding;
use crate::{Config, Events, World};

/// Outcome of one pass over the obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstaclePass {
    Clear,
    Collided,
}

/// Move every obstacle down, score the ones that left the field and check
/// the rest against the player.
///
/// Walks the list back to front so removals do not shift unvisited entries.
/// Stops at the first hit: obstacles not yet visited keep their position.
pub fn advance_obstacles(world: &mut World, config: &Config, events: &mut Events) -> ObstaclePass {
    for i in (0..world.obstacles.len()).rev() {
        let obstacle = &mut world.obstacles[i];
        obstacle.body.pos.y += obstacle.speed;

        if obstacle.is_off_field(config.field_height) {
            world.obstacles.remove(i);
            world.score.add(config.dodge_score);
            events.dodged += 1;
            tracing::trace!(score = world.score.points, "obstacle dodged");
            continue;
        }

        if is_colliding(&world.player.body, &obstacle.body) {
            events.collided = true;
            return ObstaclePass::Collided;
        }
    }
    ObstaclePass::Clear
}
