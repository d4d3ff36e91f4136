use crate::api::bounding_box::{BoxCorners, bounding_box, bounding_boxes};
use crate::api::distance::{Unit, distance};
use crate::api::geohash::hash;
use crate::core::constants::DEFAULT_PRECISION;
use crate::util::coord::Coordinate;
use crate::util::error::GeokitError;

/// Namespace bundling the four geokit operations.
///
/// Every method forwards to the free function of the same name; use whichever reads
/// better at the call site.
///
/// # Example
///
/// ```
/// use geokit_rs::{Geokit, LatLng};
///
/// # fn main() -> Result<(), geokit_rs::GeokitError> {
/// let a = LatLng::new(57.64911, 10.40744);
/// let b = LatLng::new(57.70887, 11.97456);
///
/// let km = Geokit::distance(&a, &b, "km")?;
/// let gh = Geokit::hash(&a, Some(6))?;
/// let corners = Geokit::bounding_box(&a, &b, 1.0);
///
/// assert!(km > 90.0 && km < 100.0);
/// assert_eq!(gh, "u4pruy");
/// assert_eq!(corners.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Geokit;

impl Geokit {
    /// Haversine distance; `unit` is `"km"` or `"miles"`, anything else means km.
    pub fn distance<A: Coordinate, B: Coordinate>(
        start: &A,
        end: &B,
        unit: impl Into<Unit>,
    ) -> Result<f64, GeokitError> {
        distance(start, end, unit.into())
    }

    /// Geohash at `precision` characters, or 10 when `None`.
    pub fn hash<C: Coordinate>(coord: &C, precision: Option<usize>) -> Result<String, GeokitError> {
        hash(coord, precision.unwrap_or(DEFAULT_PRECISION))
    }

    pub fn bounding_box<A: Coordinate, B: Coordinate>(a: &A, b: &B, width_km: f64) -> BoxCorners {
        bounding_box(a, b, width_km)
    }

    pub fn bounding_boxes<C: Coordinate>(coordinates: &[C], width_km: f64) -> Vec<BoxCorners> {
        bounding_boxes(coordinates, width_km)
    }
}
