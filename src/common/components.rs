use bevy::math::IVec3;

/// Compass direction on the grid. West is the +x axis in this scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    South,
    East,
    North,
}

impl Direction {
    /// Unit displacement applied to the head position each tick.
    pub fn unit_vector(self) -> IVec3 {
        match self {
            Direction::West => IVec3::new(1, 0, 0),
            Direction::South => IVec3::new(0, -1, 0),
            Direction::East => IVec3::new(-1, 0, 0),
            Direction::North => IVec3::new(0, 1, 0),
        }
    }
}
