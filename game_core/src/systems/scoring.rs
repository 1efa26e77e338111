use crate::{Config, Events, World};

/// Count the tick and pay the survival bonus on every full period
pub fn award_survival_bonus(world: &mut World, config: &Config, events: &mut Events) {
    world.frame_count += 1;
    if world.frame_count % config.survival_bonus_frames == 0 {
        world.score.add(config.survival_bonus);
        events.survival_bonus = true;
    }
}
