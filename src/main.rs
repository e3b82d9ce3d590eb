use geohash_fast::{GeohashCell, GeohashError, decode_many, encode_many};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeohashError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let lon = -72.747917;
    let lat = 45.207615;

    let cell = GeohashCell::from_coord(&(lon, lat), 5)?;

    println!("Geohash: {}", cell.hash);
    println!("Center: ({}, {})", cell.longitude, cell.latitude);
    println!("Error: ({}, {})", cell.lon_error, cell.lat_error);
    println!("Polygon: {:?}", cell.to_polygon());

    let hashes = encode_many(&[-76.6, -80.8501], &[47.1, 35.204], 4)?;
    println!("Batch: {:?}", hashes);
    println!("Centers: {:?}", decode_many(&hashes)?);

    Ok(())
}
