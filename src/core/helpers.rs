use crate::core::constants::{BASE32_ALPHABET, LAT_BOUNDS, LNG_BOUNDS};
use crate::util::coord::Coordinate;
use crate::util::error::GeokitError;
use tracing::debug;

/// A `[low, high]` interval of degrees, bisected while encoding a geohash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Keeps the half of the interval holding `value`.
    ///
    /// A value sitting exactly on the midpoint keeps the lower half.
    pub fn narrow(&mut self, value: f64) {
        let middle = self.midpoint();
        if value > middle {
            self.low = middle;
        } else {
            self.high = middle;
        }
    }
}

/// Converts degrees to radians.
pub fn to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Checks that a coordinate lies within the WGS84 latitude/longitude range.
///
/// Every bound is checked independently and all violations are reported in one
/// [`GeokitError::InvalidCoordinate`], joined by spaces.
///
/// # Example
/// ```
/// use geokit_rs::{LatLng, validate_coordinates};
///
/// assert!(validate_coordinates(&LatLng::new(51.5, -0.1)).is_ok());
///
/// let err = validate_coordinates(&LatLng::new(95.0, 185.0)).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Your latitude is greater than 90° Your longitude is greater than 180°"
/// );
/// ```
pub fn validate_coordinates<C: Coordinate>(coord: &C) -> Result<(), GeokitError> {
    let (lat, lng) = (coord.lat(), coord.lng());
    let mut violations: Vec<&str> = Vec::new();

    if lat > LAT_BOUNDS[1] {
        violations.push("Your latitude is greater than 90°");
    }
    if lat < LAT_BOUNDS[0] {
        violations.push("Your latitude is less than -90°");
    }
    if lng > LNG_BOUNDS[1] {
        violations.push("Your longitude is greater than 180°");
    }
    if lng < LNG_BOUNDS[0] {
        violations.push("Your longitude is less than -180°");
    }

    if violations.is_empty() {
        Ok(())
    } else {
        debug!(lat, lng, violations = violations.len(), "coordinate out of range");
        Err(GeokitError::InvalidCoordinate(violations.join(" ")))
    }
}

/// Slope of the segment from `a` to `b`, as change in longitude over change in latitude.
///
/// Equal latitudes divide by zero: the result is `±inf`, or NaN when both points coincide.
pub fn calculate_slope<C: Coordinate>(a: &C, b: &C) -> f64 {
    (b.lng() - a.lng()) / (b.lat() - a.lat())
}

/// Returns 1 when `point` is at or above the midpoint of `range`, else 0.
pub fn get_bit(point: f64, range: &Range) -> u8 {
    if range.midpoint() > point { 0 } else { 1 }
}

/// Maps a 5-bit value to its geohash symbol. Returns `None` above 31.
pub fn base32(value: u8) -> Option<char> {
    BASE32_ALPHABET.get(value as usize).map(|&b| b as char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::coord::LatLng;

    #[test]
    fn test_angle_conversion() {
        assert!((to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((to_deg(to_rad(57.64911)) - 57.64911).abs() < 1e-9);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(validate_coordinates(&LatLng::new(90.0, 180.0)).is_ok());
        assert!(validate_coordinates(&LatLng::new(-90.0, -180.0)).is_ok());
        assert!(validate_coordinates(&(0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let result = validate_coordinates(&LatLng::new(95.0, 185.0));
        match result {
            Err(GeokitError::InvalidCoordinate(msg)) => {
                assert!(msg.contains("latitude is greater than 90"));
                assert!(msg.contains("longitude is greater than 180"));
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_lower_bounds() {
        let result = validate_coordinates(&LatLng::new(-91.0, -181.0));
        assert_eq!(
            result,
            Err(GeokitError::InvalidCoordinate(
                "Your latitude is less than -90° Your longitude is less than -180°".into()
            ))
        );
    }

    #[test]
    fn test_validate_single_violation() {
        let result = validate_coordinates(&LatLng::new(10.0, -200.0));
        assert_eq!(
            result,
            Err(GeokitError::InvalidCoordinate(
                "Your longitude is less than -180°".into()
            ))
        );
    }

    #[test]
    fn test_calculate_slope() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(2.0, 4.0);
        assert_eq!(calculate_slope(&a, &b), 2.0);
        assert_eq!(calculate_slope(&b, &a), 2.0);
    }

    #[test]
    fn test_calculate_slope_equal_latitudes() {
        let a = LatLng::new(10.0, 0.0);
        let b = LatLng::new(10.0, 5.0);
        assert_eq!(calculate_slope(&a, &b), f64::INFINITY);
        assert_eq!(calculate_slope(&b, &a), f64::NEG_INFINITY);
        assert!(calculate_slope(&a, &a).is_nan());
    }

    #[test]
    fn test_get_bit() {
        let range = Range::new(-180.0, 180.0);
        assert_eq!(get_bit(10.0, &range), 1);
        assert_eq!(get_bit(0.0, &range), 1);
        assert_eq!(get_bit(-0.5, &range), 0);
    }

    #[test]
    fn test_range_narrow() {
        let mut range = Range::new(-90.0, 90.0);
        range.narrow(57.6);
        assert_eq!(range, Range::new(0.0, 90.0));
        range.narrow(10.0);
        assert_eq!(range, Range::new(0.0, 45.0));
        range.narrow(22.5);
        assert_eq!(range, Range::new(0.0, 22.5));
    }

    #[test]
    fn test_base32() {
        assert_eq!(base32(0), Some('0'));
        assert_eq!(base32(10), Some('b'));
        assert_eq!(base32(31), Some('z'));
        assert_eq!(base32(32), None);
    }
}
