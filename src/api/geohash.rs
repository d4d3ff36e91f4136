use crate::core::constants::{BITS_PER_CHAR, DEFAULT_PRECISION, LAT_BOUNDS, LNG_BOUNDS};
use crate::core::helpers::{Range, base32, get_bit, validate_coordinates};
use crate::util::coord::Coordinate;
use crate::util::error::GeokitError;
use tracing::trace;

/// Encodes a coordinate as a geohash of exactly `precision` characters.
///
/// Bits alternate between longitude and latitude, starting with longitude, and the
/// bit index runs continuously across characters. Each group of five bits becomes
/// one base-32 symbol.
///
/// # Process
///
/// 1. Validates the coordinate
/// 2. Starts from the full latitude `[-90, 90]` and longitude `[-180, 180]` ranges
/// 3. For each bit, emits 1 if the value is at or above the range midpoint, then
///    narrows that range to the half holding the value
/// 4. Packs five bits most-significant-first and maps them through the alphabet
///
/// # Example
/// ```
/// use geokit_rs::{LatLng, hash};
///
/// # fn main() -> Result<(), geokit_rs::GeokitError> {
/// let gh = hash(&LatLng::new(57.64911, 10.40744), 6)?;
/// assert_eq!(gh, "u4pruy");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeokitError::InvalidCoordinate`] - Latitude or longitude out of range
pub fn hash<C: Coordinate>(coord: &C, precision: usize) -> Result<String, GeokitError> {
    validate_coordinates(coord)?;

    let (lat, lng) = (coord.lat(), coord.lng());
    let mut lat_range = Range::new(LAT_BOUNDS[0], LAT_BOUNDS[1]);
    let mut lng_range = Range::new(LNG_BOUNDS[0], LNG_BOUNDS[1]);

    let mut geohash = String::with_capacity(precision);
    let mut bit_index = 0usize;

    while geohash.len() < precision {
        let mut chunk = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let (value, range) = if bit_index % 2 == 0 {
                (lng, &mut lng_range)
            } else {
                (lat, &mut lat_range)
            };
            chunk = (chunk << 1) | get_bit(value, range);
            range.narrow(value);
            bit_index += 1;
        }
        // five bits never exceed 31
        if let Some(symbol) = base32(chunk) {
            geohash.push(symbol);
        }
    }

    trace!(lat, lng, precision, %geohash, "encoded geohash");
    Ok(geohash)
}

/// Encodes a coordinate as a geohash at the default precision of 10 characters.
pub fn hash_default<C: Coordinate>(coord: &C) -> Result<String, GeokitError> {
    hash(coord, DEFAULT_PRECISION)
}
