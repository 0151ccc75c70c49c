use hecs::World;

use crate::{Court, Paddle, PointerInput, Side};

/// Move the pointer-controlled paddle to the latest pointer position
pub fn apply_pointer_input(world: &mut World, court: &Court, input: &mut PointerInput) {
    let Some(target_y) = input.take() else {
        return;
    };
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.pos.y = court.clamp_y(target_y, paddle.size.y);
        }
    }
}
