use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::common::components::Direction;
use crate::snake::components::SnakeSystem;
use crate::state::GameState;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DirectionCommand>()
            .init_resource::<DirectionBindings>()
            .add_system(
                direction_input
                    .run_in_state(GameState::Running)
                    .before(SnakeSystem::ApplyDirection),
            );
    }
}

/// Request to steer the snake, consumed by the movement plugin.
pub struct DirectionCommand(pub Direction);

/// One registration: any key in the set steers toward the direction.
pub struct KeyBinding {
    pub keys: Vec<KeyCode>,
    pub direction: Direction,
}

/// Table of key registrations. Keys outside every set are ignored.
pub struct DirectionBindings {
    bindings: Vec<KeyBinding>,
}

impl DirectionBindings {
    pub fn matching(&self, key: KeyCode) -> impl Iterator<Item = Direction> + '_ {
        self.bindings
            .iter()
            .filter(move |binding| binding.keys.contains(&key))
            .map(|binding| binding.direction)
    }
}

impl Default for DirectionBindings {
    // WASD. D steers +x, which this grid calls west.
    fn default() -> Self {
        DirectionBindings {
            bindings: vec![
                KeyBinding {
                    keys: vec![KeyCode::D],
                    direction: Direction::West,
                },
                KeyBinding {
                    keys: vec![KeyCode::S],
                    direction: Direction::South,
                },
                KeyBinding {
                    keys: vec![KeyCode::A],
                    direction: Direction::East,
                },
                KeyBinding {
                    keys: vec![KeyCode::W],
                    direction: Direction::North,
                },
            ],
        }
    }
}

pub fn direction_input(
    keys: Res<Input<KeyCode>>,
    bindings: Res<DirectionBindings>,
    mut requests: EventWriter<DirectionCommand>,
) {
    for key in keys.get_just_pressed() {
        debug!("key down: {:?}", key);
        for direction in bindings.matching(*key) {
            requests.send(DirectionCommand(direction));
        }
    }
}
