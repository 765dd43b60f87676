//! Projection and grid constants shared by every spatial ID computation.

/// Latitude limit in degrees of the world projection. Latitudes are clamped to
/// `[-MAX_LAT, MAX_LAT]` before any tile computation.
pub const MAX_LAT: f64 = 85.0511287798;

/// Longitude limit in degrees.
pub const MAX_LNG: f64 = 180.0;

/// Deepest zoom level. At this level the horizontal grid indices still fit into `u32`.
pub const MAX_ZOOM: u8 = 31;

/// Zoom level at which one floor is exactly [`BASE_FLOOR_HEIGHT`] meters high.
pub const BASE_ZOOM: u8 = 25;

/// Floor height in meters at [`BASE_ZOOM`].
pub const BASE_FLOOR_HEIGHT: f64 = 1.0;
