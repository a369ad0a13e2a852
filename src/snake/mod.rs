use std::time::Duration;

use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::input::DirectionCommand;
use crate::snake::components::SnakeSystem;
use crate::snake::resources::{SegmentIdAllocator, SnakeState, TickTimer};
use crate::state::GameState;

pub mod components;
pub mod resources;

pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        let mut allocator = SegmentIdAllocator::new();
        let state = SnakeState::new(&mut allocator);
        app.insert_resource(state)
            .insert_resource(allocator)
            .init_resource::<TickTimer>()
            .add_system(
                apply_direction
                    .run_in_state(GameState::Running)
                    .label(SnakeSystem::ApplyDirection),
            )
            .add_system(
                snake_movement
                    .run_in_state(GameState::Running)
                    .label(SnakeSystem::Movement)
                    .after(SnakeSystem::ApplyDirection),
            )
            .add_enter_system(GameState::Stopped, teardown);
    }
}

/// Tick the movement timer by the frame delta; when it fires, produce the next
/// snapshot. Returns None on frames between ticks.
pub fn advance(timer: &mut Timer, delta: Duration, state: &SnakeState) -> Option<SnakeState> {
    timer.tick(delta);
    if timer.just_finished() {
        Some(state.tick())
    } else {
        None
    }
}

/// Direction changes land on the snapshot before the movement system runs, so
/// a keypress followed by a tick in the same frame already moves the new way.
fn apply_direction(mut requests: EventReader<DirectionCommand>, mut state: ResMut<SnakeState>) {
    for DirectionCommand(direction) in requests.iter() {
        let next = state.set_direction(*direction);
        *state = next;
        debug!("Heading {:?}", state.direction());
    }
}

fn snake_movement(time: Res<Time>, mut timer: ResMut<TickTimer>, mut state: ResMut<SnakeState>) {
    if let Some(next) = advance(&mut timer.0, time.delta(), &state) {
        *state = next;
    }
}

/// Cancels the pending timer and drops the snake model. After this runs, no
/// movement or input system fires again.
fn teardown(mut commands: Commands) {
    info!("Tearing down snake state");
    commands.remove_resource::<SnakeState>();
    commands.remove_resource::<TickTimer>();
    commands.remove_resource::<SegmentIdAllocator>();
}
