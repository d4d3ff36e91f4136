use crate::core::helpers::calculate_slope;
use crate::util::coord::{Coordinate, LatLng};
use crate::util::error::GeokitError;
use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiPolygon, Polygon, Rect};
use geojson::{Feature, FeatureCollection};
use tracing::trace;

/// Four corners approximating a halo around a segment.
pub type BoxCorners = [LatLng; 4];

/// Generates four corners serving as a bounding box around the segment from `a` to `b`.
///
/// `width_km` is scaled by `√2 / 2` and then added directly to degree values, so the
/// result is a heuristic halo rather than a geodesic offset. No range validation is
/// performed on the inputs.
///
/// The point with the greater longitude is the top, the other the bottom. When the
/// slope between the points is positive the halo leans one diagonal, otherwise the
/// other. Points sharing a latitude use the non-positive layout whatever the sign of
/// their infinite slope.
///
/// # Example
/// ```
/// use geokit_rs::{LatLng, bounding_box};
///
/// let corners = bounding_box(&LatLng::new(0.0, 0.0), &LatLng::new(1.0, 1.0), 2.0);
/// assert_eq!(corners.len(), 4);
/// ```
pub fn bounding_box<A: Coordinate, B: Coordinate>(a: &A, b: &B, width_km: f64) -> BoxCorners {
    let (a, b) = (a.to_lat_lng(), b.to_lat_lng());
    let slope = calculate_slope(&a, &b);
    let rising = a.lat != b.lat && slope > 0.0;
    let width = (2.0_f64.sqrt() * width_km) / 2.0;

    let (top, bottom) = if a.lng > b.lng { (a, b) } else { (b, a) };

    // point1 and point4 are the same in both layouts
    let point1 = LatLng::new(top.lat, top.lng + width);
    let point4 = LatLng::new(bottom.lat, bottom.lng - width);
    let (point2, point3) = if rising {
        (
            LatLng::new(top.lat + width, top.lng),
            LatLng::new(bottom.lat - width, bottom.lng),
        )
    } else {
        (
            LatLng::new(top.lat - width, top.lng),
            LatLng::new(bottom.lat + width, bottom.lng),
        )
    };

    trace!(slope, rising, width, "computed bounding box");
    [point1, point2, point3, point4]
}

/// Generates one bounding box per consecutive pair of points along a path.
///
/// A path of `n` points yields `n - 1` boxes; fewer than two points yield none.
///
/// # Example
/// ```
/// use geokit_rs::{LatLng, bounding_boxes};
///
/// let path = [LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0), LatLng::new(2.0, 0.5)];
/// let boxes = bounding_boxes(&path, 1.0);
/// assert_eq!(boxes.len(), 2);
/// ```
pub fn bounding_boxes<C: Coordinate>(coordinates: &[C], width_km: f64) -> Vec<BoxCorners> {
    coordinates
        .windows(2)
        .map(|pair| bounding_box(&pair[0], &pair[1], width_km))
        .collect()
}

/// Geometry conversions for a single set of box corners.
pub trait BoxGeometry {
    /// Closed polygon through the four corners in order (x = lng, y = lat).
    fn to_polygon(&self) -> Polygon<f64>;

    /// Axis-aligned rectangle enclosing the corners.
    fn envelope(&self) -> Option<Rect<f64>>;
}

impl BoxGeometry for BoxCorners {
    fn to_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self.iter().map(|&c| c.into()).collect();
        Polygon::new(LineString::from(coords), vec![])
    }

    fn envelope(&self) -> Option<Rect<f64>> {
        self.to_polygon().bounding_rect()
    }
}

/// Export of a path's boxes as GIS geometries.
///
/// # Example
///
/// ```
/// use geokit_rs::{BoxesToGeoJson, LatLng, bounding_boxes};
///
/// # fn main() -> Result<(), geokit_rs::GeokitError> {
/// let path = [LatLng::new(51.50, -0.12), LatLng::new(51.52, -0.10)];
/// let json = bounding_boxes(&path, 0.01).to_geojson_string()?;
/// assert!(json.contains("FeatureCollection"));
/// # Ok(())
/// # }
/// ```
pub trait BoxesToGeoJson {
    fn to_multi_polygon(&self) -> MultiPolygon<f64>;

    /// GeoJSON `FeatureCollection` with one Polygon feature per box,
    /// carrying its position along the path as the `index` property.
    fn to_geojson_string(&self) -> Result<String, GeokitError>;
}

impl BoxesToGeoJson for [BoxCorners] {
    fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.iter().map(|corners| corners.to_polygon()).collect())
    }

    fn to_geojson_string(&self) -> Result<String, GeokitError> {
        let features: Vec<Feature> = self
            .iter()
            .enumerate()
            .map(|(index, corners)| {
                let mut feature = Feature::from(geojson::Geometry::from(&corners.to_polygon()));
                feature.set_property("index", index);
                feature
            })
            .collect();

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };

        serde_json::to_string(&collection)
            .map_err(|e| GeokitError::SerializationError(e.to_string()))
    }
}
