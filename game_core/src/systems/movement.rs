use crate::{Config, InputState, Player};

/// Apply lateral steering, then clamp to the play field.
///
/// Left and right are applied independently, so holding both cancels out.
pub fn move_player(player: &mut Player, input: &InputState, config: &Config) {
    if input.move_left {
        player.body.pos.x -= player.speed;
    }
    if input.move_right {
        player.body.pos.x += player.speed;
    }

    // Clamp to field bounds
    player.body.pos.x = config.clamp_player_x(player.body.pos.x);
}
