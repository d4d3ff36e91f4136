//! # geokit-rs
//!
//! Geospatial primitives over WGS84 latitude/longitude coordinates.
//!
//! ### 1. `distance` - Great-Circle Distance
//!
//! ```
//! use geokit_rs::{LatLng, Unit, distance};
//!
//! # fn main() -> Result<(), geokit_rs::GeokitError> {
//! let km = distance(&LatLng::new(51.5074, -0.1278), &LatLng::new(48.8566, 2.3522), Unit::Kilometers)?;
//! println!("{:.1} km", km);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `hash` - Geohash Encoding
//!
//! ```
//! use geokit_rs::{LatLng, hash, hash_default};
//!
//! # fn main() -> Result<(), geokit_rs::GeokitError> {
//! assert_eq!(hash(&LatLng::new(57.64911, 10.40744), 6)?, "u4pruy");
//! assert_eq!(hash_default(&LatLng::new(57.64911, 10.40744))?.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `bounding_boxes` - Halos Along a Path
//!
//! Any [`Coordinate`] works as input, including `geo_types::Point` and `(lng, lat)` tuples:
//!
//! ```
//! use geokit_rs::{BoxGeometry, BoxesToGeoJson, bounding_boxes};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geokit_rs::GeokitError> {
//! let path = [
//!     point! { x: -0.1278, y: 51.5074 },
//!     point! { x: -0.1000, y: 51.5200 },
//!     point! { x: -0.0800, y: 51.5150 },
//! ];
//! let boxes = bounding_boxes(&path, 0.01);
//! assert_eq!(boxes.len(), 2);
//!
//! let polygon = boxes[0].to_polygon();
//! let geojson = boxes.to_geojson_string()?;
//! # let _ = (polygon, geojson);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BoxCorners, BoxGeometry, BoxesToGeoJson, Geokit, Unit, bounding_box, bounding_boxes, distance,
    hash, hash_default,
};
pub use crate::core::{
    BASE32_ALPHABET, DEFAULT_PRECISION, EARTH_RADIUS_KM, EARTH_RADIUS_MILES, Range, base32,
    calculate_slope, get_bit, to_deg, to_rad, validate_coordinates,
};
pub use util::{Coordinate, GeokitError, LatLng};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeokitError> {
        let path = [
            LatLng::new(57.64911, 10.40744),
            LatLng::new(57.70887, 11.97456),
            LatLng::new(59.32932, 18.06858),
        ];

        let total: f64 = path
            .windows(2)
            .map(|w| distance(&w[0], &w[1], Unit::Kilometers))
            .sum::<Result<f64, GeokitError>>()?;
        assert!(total > 400.0);

        let hashes: Vec<String> = path
            .iter()
            .map(|p| hash(p, 5))
            .collect::<Result<_, _>>()?;
        assert_eq!(hashes[0], "u4pru");
        assert!(hashes.iter().all(|h| h.starts_with('u')));

        let boxes = bounding_boxes(&path, 0.5);
        assert_eq!(boxes.len(), path.len() - 1);
        assert_eq!(boxes.to_multi_polygon().0.len(), 2);
        Ok(())
    }

    #[test]
    fn test_geo_types_interop() -> Result<(), GeokitError> {
        let a = point! { x: 10.40744, y: 57.64911 };
        let b = LatLng::new(57.64911, 10.40744);

        assert_eq!(hash(&a, 8)?, hash(&b, 8)?);
        assert_eq!(distance(&a, &b, Unit::Miles)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_validation_asymmetry() {
        let bad = LatLng::new(120.0, 0.0);
        let ok = LatLng::new(0.0, 0.0);

        assert!(distance(&bad, &ok, Unit::Kilometers).is_err());
        assert!(hash(&bad, 4).is_err());
        assert_eq!(bounding_box(&bad, &ok, 1.0).len(), 4);
    }
}
