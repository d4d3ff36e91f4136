pub mod bounding_box;
pub mod distance;
pub mod geohash;
pub mod geokit;

pub use bounding_box::{BoxCorners, BoxGeometry, BoxesToGeoJson, bounding_box, bounding_boxes};
pub use distance::{Unit, distance};
pub use geohash::{hash, hash_default};
pub use geokit::Geokit;
