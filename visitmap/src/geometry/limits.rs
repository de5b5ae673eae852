// Ingestion caps for catalogs supplied at runtime (JSON / coords strings)

pub const MAX_MUNICIPALITIES: usize = 10_000;
pub const MAX_SUBDIVISIONS: usize = 1_000;
pub const MAX_BOUNDARY_POINTS: usize = 100_000;

// A polygon needs at least a triangle
pub const MIN_BOUNDARY_POINTS: usize = 3;

pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
