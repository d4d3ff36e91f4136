use crate::core::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MILES};
use crate::core::helpers::{to_rad, validate_coordinates};
use crate::util::coord::Coordinate;
use crate::util::error::GeokitError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use tracing::trace;

/// Unit a distance is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    Miles,
}

impl Unit {
    /// Earth radius expressed in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            Unit::Kilometers => EARTH_RADIUS_KM,
            Unit::Miles => EARTH_RADIUS_MILES,
        }
    }
}

/// Only `"miles"` selects miles; any other text falls back to kilometers.
impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        if s == "miles" {
            Unit::Miles
        } else {
            Unit::Kilometers
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Unit::from(s))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kilometers => write!(f, "km"),
            Unit::Miles => write!(f, "miles"),
        }
    }
}

/// Great-circle distance between two coordinates using the haversine formula.
///
/// Both endpoints are validated first. A rejected endpoint yields
/// [`GeokitError::InvalidCoordinate`] whose message starts with
/// `"Start coordinates: "` or `"End coordinates: "`.
///
/// # Example
/// ```
/// use geokit_rs::{LatLng, Unit, distance};
///
/// # fn main() -> Result<(), geokit_rs::GeokitError> {
/// let km = distance(&LatLng::new(0.0, 0.0), &LatLng::new(0.0, 90.0), Unit::Kilometers)?;
/// assert!((km - 10007.5).abs() < 0.1);
///
/// let miles = distance(&LatLng::new(0.0, 0.0), &LatLng::new(0.0, 90.0), "miles".into())?;
/// assert!(miles < km);
/// # Ok(())
/// # }
/// ```
pub fn distance<A: Coordinate, B: Coordinate>(
    start: &A,
    end: &B,
    unit: Unit,
) -> Result<f64, GeokitError> {
    validate_coordinates(start).map_err(|e| e.with_context("Start coordinates"))?;
    validate_coordinates(end).map_err(|e| e.with_context("End coordinates"))?;

    let d_lat = to_rad(end.lat() - start.lat());
    let d_lng = to_rad(end.lng() - start.lng());
    let lat1 = to_rad(start.lat());
    let lat2 = to_rad(end.lat());

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let result = unit.earth_radius() * c;

    trace!(result, %unit, "computed haversine distance");
    Ok(result)
}
