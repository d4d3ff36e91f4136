use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
///
/// Nothing checks the range on construction; [`distance`](crate::distance) and
/// [`hash`](crate::hash) validate their inputs, the bounding-box functions do not.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Trait for types that can provide a longitude/latitude pair.
///
/// Implemented for [`LatLng`], `(f64, f64)` tuples in `(lng, lat)` order,
/// `geo_types::Point<f64>` and `geo_types::Coord<f64>`.
/// This allows the public functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;

    fn lat(&self) -> f64 {
        self.y()
    }

    fn lng(&self) -> f64 {
        self.x()
    }

    fn to_lat_lng(&self) -> LatLng {
        LatLng::new(self.lat(), self.lng())
    }
}

impl Coordinate for LatLng {
    fn x(&self) -> f64 {
        self.lng
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        LatLng::new(point.y(), point.x())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(ll: LatLng) -> Self {
        Point::new(ll.lng, ll.lat)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(ll: LatLng) -> Self {
        Coord {
            x: ll.lng,
            y: ll.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (10.40744, 57.64911);
        assert_eq!(tuple.lng(), 10.40744);
        assert_eq!(tuple.lat(), 57.64911);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let pt = point! { x: -2.248, y: 53.481 };
        assert_eq!(pt.lng(), -2.248);
        assert_eq!(pt.lat(), 53.481);
    }

    #[test]
    fn test_same_lat_lng_from_every_source() {
        let from_tuple = (-0.1, 51.5).to_lat_lng();
        let from_point = point! { x: -0.1, y: 51.5 }.to_lat_lng();
        let from_coord = coord! { x: -0.1, y: 51.5 }.to_lat_lng();

        assert_eq!(from_tuple, LatLng::new(51.5, -0.1));
        assert_eq!(from_tuple, from_point);
        assert_eq!(from_point, from_coord);
    }

    #[test]
    fn test_point_conversion() {
        let ll = LatLng::new(53.481, -2.248);
        let pt: Point<f64> = ll.into();
        assert_eq!(pt.x(), -2.248);
        assert_eq!(pt.y(), 53.481);
        assert_eq!(LatLng::from(pt), ll);
    }

    #[test]
    fn test_serde_field_names() -> Result<(), serde_json::Error> {
        let ll = LatLng::new(1.5, -2.5);
        let json = serde_json::to_string(&ll)?;
        assert_eq!(json, r#"{"lat":1.5,"lng":-2.5}"#);

        let back: LatLng = serde_json::from_str(&json)?;
        assert_eq!(back, ll);
        Ok(())
    }
}
