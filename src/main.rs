use geokit_rs::{BoxesToGeoJson, GeokitError, LatLng, Unit, bounding_boxes, distance, hash};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeokitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = [
        LatLng::new(57.64911, 10.40744),
        LatLng::new(57.70887, 11.97456),
        LatLng::new(59.32932, 18.06858),
    ];

    for pair in path.windows(2) {
        let km = distance(&pair[0], &pair[1], Unit::Kilometers)?;
        let miles = distance(&pair[0], &pair[1], Unit::Miles)?;
        info!(km, miles, "leg distance");
    }

    for point in &path {
        let geohash = hash(point, 9)?;
        println!("{:?} -> {}", point, geohash);
    }

    let boxes = bounding_boxes(&path, 0.5);
    println!("Boxes: {:?}", boxes);
    println!("GeoJSON: {}", boxes.to_geojson_string()?);

    Ok(())
}
