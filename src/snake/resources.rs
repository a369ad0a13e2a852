use bevy::math::IVec3;
use bevy::prelude::*;

use crate::common::components::Direction;
use crate::common::constants::{SEGMENT_COUNT, TICK_INTERVAL};

/// Stable identity of one body segment. Ids only exist so the renderer can keep
/// per-cube state across ticks; game logic never compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(u64);

/// Monotonic id source, owned by the app as a resource rather than hidden in a
/// module-global counter.
pub struct SegmentIdAllocator {
    next: u64,
}

impl SegmentIdAllocator {
    pub fn new() -> Self {
        SegmentIdAllocator { next: 0 }
    }

    pub fn allocate(&mut self) -> SegmentId {
        let id = SegmentId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub position: IVec3,
}

/// Immutable snapshot of the snake: segments ordered tail to head plus the
/// direction the head moves on the next tick. Systems replace the whole
/// resource rather than mutating segments in place, so change detection on the
/// resource doubles as the publish channel toward the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    direction: Direction,
    segments: Vec<Segment>,
}

impl SnakeState {
    /// Initial snake: SEGMENT_COUNT collinear segments at x = 0.., heading west.
    pub fn new(allocator: &mut SegmentIdAllocator) -> Self {
        let segments = (0..SEGMENT_COUNT)
            .map(|x| Segment {
                id: allocator.allocate(),
                position: IVec3::new(x as i32, 0, 0),
            })
            .collect();
        SnakeState {
            direction: Direction::West,
            segments,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segments in body order, tail first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn position_of(&self, id: SegmentId) -> Option<IVec3> {
        self.segments
            .iter()
            .find(|segment| segment.id == id)
            .map(|segment| segment.position)
    }

    /// Advance one grid cell: the tail segment's id is relocated to the cell
    /// one unit beyond the head. Pure; the segment count never changes.
    pub fn tick(&self) -> SnakeState {
        let head = self.segments.last().expect("snake is never empty");
        let tail = self.segments.first().expect("snake is never empty");
        let new_head = Segment {
            id: tail.id,
            position: head.position + self.direction.unit_vector(),
        };

        let mut segments = Vec::with_capacity(self.segments.len());
        segments.extend_from_slice(&self.segments[1..]);
        segments.push(new_head);
        SnakeState {
            direction: self.direction,
            segments,
        }
    }

    /// Replace the direction, effective on the next tick. Unvalidated:
    /// reversing into the body is permitted in this demo.
    pub fn set_direction(&self, direction: Direction) -> SnakeState {
        SnakeState {
            direction,
            segments: self.segments.clone(),
        }
    }
}

/// Repeating movement timer, ticked by the frame delta.
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        TickTimer(Timer::from_seconds(TICK_INTERVAL, true))
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::IVec3;

    use crate::common::components::Direction;
    use crate::common::constants::SEGMENT_COUNT;
    use crate::snake::resources::{SegmentIdAllocator, SnakeState};

    fn new_snake() -> (SnakeState, SegmentIdAllocator) {
        let mut allocator = SegmentIdAllocator::new();
        let state = SnakeState::new(&mut allocator);
        (state, allocator)
    }

    #[test]
    fn allocator_hands_out_distinct_ids() {
        let mut allocator = SegmentIdAllocator::new();
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert_ne!(a, b);
    }

    #[test]
    fn initial_snake_is_collinear_heading_west() {
        let (state, _) = new_snake();
        assert_eq!(state.direction(), Direction::West);
        assert_eq!(state.segments().len(), SEGMENT_COUNT);
        for (x, segment) in state.segments().iter().enumerate() {
            assert_eq!(segment.position, IVec3::new(x as i32, 0, 0));
        }
    }

    #[test]
    fn tick_preserves_segment_count() {
        let (mut state, _) = new_snake();
        for _ in 0..10 {
            state = state.tick();
            assert_eq!(state.segments().len(), SEGMENT_COUNT);
        }
    }

    #[test]
    fn tick_preserves_identity_multiset() {
        let (state, _) = new_snake();
        let mut before: Vec<_> = state.segments().iter().map(|s| s.id).collect();
        let next = state.tick();
        let mut after: Vec<_> = next.segments().iter().map(|s| s.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn tick_relocates_the_tail_to_the_new_head_cell() {
        let (state, _) = new_snake();
        let tail_id = state.segments()[0].id;
        assert_eq!(state.segments()[0].position, IVec3::new(0, 0, 0));

        let next = state.tick();
        let head = next.segments().last().unwrap();
        assert_eq!(head.id, tail_id);
        assert_eq!(head.position, IVec3::new(6, 0, 0));
        assert!(next
            .segments()
            .iter()
            .all(|s| s.position != IVec3::new(0, 0, 0)));
    }

    #[test]
    fn set_direction_takes_effect_on_the_same_tick() {
        let (state, _) = new_snake();
        let next = state.set_direction(Direction::North).tick();
        let head = next.segments().last().unwrap();
        // Head was at (5,0,0); north is (0,1,0).
        assert_eq!(head.position, IVec3::new(5, 1, 0));
        assert_eq!(next.direction(), Direction::North);
    }

    #[test]
    fn reversing_is_not_validated() {
        let (state, _) = new_snake();
        let next = state.set_direction(Direction::East).tick();
        let head = next.segments().last().unwrap();
        // The head backs into the cell the body already occupies; the demo
        // performs no collision handling.
        assert_eq!(head.position, IVec3::new(4, 0, 0));
        assert_eq!(next.segments().len(), SEGMENT_COUNT);
    }

    #[test]
    fn two_ticks_shift_the_window_by_two() {
        let (mut state, _) = new_snake();
        state = state.tick();
        state = state.tick();
        let mut xs: Vec<i32> = state.segments().iter().map(|s| s.position.x).collect();
        xs.sort_unstable();
        assert_eq!(xs, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(state.direction(), Direction::West);
    }

    #[test]
    fn position_of_tracks_a_segment_across_ticks() {
        let (state, _) = new_snake();
        let tail_id = state.segments()[0].id;
        assert_eq!(state.position_of(tail_id), Some(IVec3::new(0, 0, 0)));
        let next = state.tick();
        assert_eq!(next.position_of(tail_id), Some(IVec3::new(6, 0, 0)));
    }
}
