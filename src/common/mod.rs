use bevy::app::AppExit;
use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::common::constants::{CUBE_SCALE, WORLD_SCALE};
use crate::snake::components::SegmentCube;
use crate::snake::resources::SnakeState;
use crate::state::GameState;

pub mod components;
pub mod constants;

pub struct CommonPlugin;

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.3,
        })
        .add_startup_system(setup_camera)
        .add_startup_system(setup_lighting)
        .add_startup_system(spawn_segment_cubes)
        .add_system(request_teardown.run_in_state(GameState::Running))
        .add_system_set_to_stage(
            CoreStage::PostUpdate,
            ConditionSet::new()
                .run_in_state(GameState::Running)
                .with_system(position_translation)
                .into(),
        )
        .add_enter_system(GameState::Stopped, despawn_segment_cubes);
    }
}

const SEGMENT_COLOR: Color = Color::ORANGE;

fn setup_camera(mut commands: Commands) {
    commands.spawn_bundle(Camera3dBundle {
        transform: Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
}

fn setup_lighting(mut commands: Commands) {
    commands.spawn_bundle(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            ..default()
        },
        transform: Transform::from_xyz(10.0, 10.0, 10.0),
        ..default()
    });
}

/// One cube per body segment, tagged with the segment's id so the cube follows
/// that identity across ticks.
fn spawn_segment_cubes(
    mut commands: Commands,
    state: Res<SnakeState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Mesh::from(shape::Cube { size: 1.0 }));
    let material = materials.add(SEGMENT_COLOR.into());
    for segment in state.segments() {
        commands
            .spawn_bundle(PbrBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_translation(
                    segment.position.as_vec3() * WORLD_SCALE,
                )
                .with_scale(Vec3::splat(CUBE_SCALE)),
                ..default()
            })
            .insert(SegmentCube { id: segment.id });
    }
    info!("Spawned {} segment cubes", state.segments().len());
}

/// Subscriber side of the snapshot: runs after the frame's systems and copies
/// positions into cube transforms whenever the snake resource changed.
fn position_translation(
    state: Res<SnakeState>,
    mut cubes: Query<(&SegmentCube, &mut Transform)>,
) {
    if !state.is_changed() {
        return;
    }
    for (cube, mut transform) in cubes.iter_mut() {
        if let Some(position) = state.position_of(cube.id) {
            transform.translation = position.as_vec3() * WORLD_SCALE;
        }
    }
}

fn request_teardown(keys: Res<Input<KeyCode>>, mut commands: Commands) {
    if keys.just_pressed(KeyCode::Escape) {
        commands.insert_resource(NextState(GameState::Stopped));
    }
}

fn despawn_segment_cubes(
    mut commands: Commands,
    cubes: Query<Entity, With<SegmentCube>>,
    mut exit: EventWriter<AppExit>,
) {
    for entity in cubes.iter() {
        commands.entity(entity).despawn();
    }
    exit.send(AppExit);
}
