use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::state::GameState;

mod common;
mod input;
mod snake;
mod state;

fn main() {
    App::new()
        .insert_resource(WindowDescriptor {
            title: "Snake!".to_string(),
            width: 1000.0,
            height: 1000.0,
            position: WindowPosition::Centered(MonitorSelection::Primary),
            ..default()
        })
        .insert_resource(ClearColor(Color::rgb(0.04, 0.04, 0.04)))
        .add_loopless_state(GameState::Running)
        .add_plugins(DefaultPlugins)
        .add_plugin(common::CommonPlugin)
        .add_plugin(snake::SnakePlugin)
        .add_plugin(input::InputPlugin)
        .run();
}
