/// Mean Earth radius in kilometers used by the haversine distance
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius in miles used by the haversine distance
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Geohash length produced by [`hash_default`](crate::hash_default)
pub const DEFAULT_PRECISION: usize = 10;

/// Bits encoded by each geohash character
pub const BITS_PER_CHAR: usize = 5;

/// Geohash base-32 alphabet (no `a`, `i`, `l` or `o`)
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Latitude extents [min, max]
pub const LAT_BOUNDS: [f64; 2] = [-90.0, 90.0];

/// Longitude extents [min, max]
pub const LNG_BOUNDS: [f64; 2] = [-180.0, 180.0];
