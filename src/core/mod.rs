pub mod constants;
pub mod helpers;

pub use constants::{
    BASE32_ALPHABET, BITS_PER_CHAR, DEFAULT_PRECISION, EARTH_RADIUS_KM, EARTH_RADIUS_MILES,
    LAT_BOUNDS, LNG_BOUNDS,
};
pub use helpers::{
    Range, base32, calculate_slope, get_bit, to_deg, to_rad, validate_coordinates,
};
