use bevy::prelude::{Component, SystemLabel};

use crate::snake::resources::SegmentId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, SystemLabel)]
pub enum SnakeSystem {
    ApplyDirection,
    Movement,
}

/// Tags one rendered cube with the segment identity it follows. The id is
/// stable across ticks even though the segment's position is not, so per-cube
/// visual state survives movement.
#[derive(Component)]
pub struct SegmentCube {
    pub id: SegmentId,
}
