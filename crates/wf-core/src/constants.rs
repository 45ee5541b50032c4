/// Nominal height span distributed across the token stream.
pub const HEIGHT_SPAN: f32 = 100.0;

/// Scale factor applied to the per-index height fraction.
pub const HEIGHT_STEP: f32 = 0.2;

/// Vertical offset applied to every batch height at placement time.
pub const VERTICAL_BIAS: f32 = -10.0;

/// Falling: per-tick scale multiplier.
pub const SHRINK_FACTOR: f32 = 0.98;

/// Falling: scale floor, keeps geometry from degenerating to zero size.
pub const MIN_SCALE: f32 = 0.1;

/// Falling: per-tick vertical drop.
pub const FALL_RATE: f32 = 0.05;

/// Falling: altitude floor, markers never fall past this.
pub const MIN_ALTITUDE: f32 = -10.0;

/// Pulsing: fraction of the original scale the oscillation swings by.
pub const PULSE_AMPLITUDE: f32 = 0.3;

/// Pulsing: oscillation frequency in radians per elapsed second.
pub const PULSE_FREQUENCY: f32 = 2.0;

/// Floating: per-tick vertical rise until the ceiling is reached.
pub const FLOAT_RATE: f32 = 0.03;

/// Floating: minimum rise above spawn height when sampling a ceiling.
pub const FLOAT_RISE_MIN: f32 = 2.0;

/// Floating: maximum rise above spawn height when sampling a ceiling.
pub const FLOAT_RISE_MAX: f32 = 8.0;

/// Clamp for degenerate spread values; larger inputs saturate here.
pub const MAX_SPREAD_RADIUS: f32 = 1000.0;

/// Clamp for degenerate scale values; larger inputs saturate here.
pub const MAX_MARKER_SCALE: f32 = 100.0;

/// Default lateral spread per term slot.
pub const DEFAULT_SPREAD_RADIUS: f32 = 10.0;

/// Default markers generated per occurrence.
pub const DEFAULT_MARKER_COUNT: usize = 10;

/// Default uniform marker scale.
pub const DEFAULT_MARKER_SCALE: f32 = 1.0;
