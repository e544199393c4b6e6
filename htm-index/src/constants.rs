//! Mesh-wide limits.

/// Deepest level whose identifier still fits in a `u64` (4 + 2·30 = 64 bits).
pub const MAX_LEVEL: u32 = 30;

/// Number of level-0 trixels: the faces of the octahedron.
pub const BASE_TRIXELS: usize = 8;

/// Level at which cover ranges are expressed when none is given.
pub const DEFAULT_RANGE_LEVEL: u32 = 20;

/// Cover depth used when none is given.
pub const DEFAULT_MAX_DEPTH: u32 = 8;
