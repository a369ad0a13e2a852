/// Seconds between movement ticks.
pub const TICK_INTERVAL: f32 = 0.3;

/// The snake never grows or shrinks in this demo.
pub const SEGMENT_COUNT: usize = 6;

/// One grid cell spans this many world units.
pub const WORLD_SCALE: f32 = 0.2;

/// Uniform scale applied to each segment cube.
pub const CUBE_SCALE: f32 = 0.17;
