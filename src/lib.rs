//! # geohash-fast
//!
//! Encode longitude/latitude pairs into geohash strings and back, one at a
//! time or in parallel batches.
//!
//! ### 1. Scalar encode / decode
//!
//! ```
//! use geohash_fast::{decode, encode};
//!
//! # fn main() -> Result<(), geohash_fast::GeohashError> {
//! let hash = encode(-72.747917, 45.207615, 5)?;
//! assert_eq!(hash, "f2h30");
//!
//! let (lon, lat, lon_err, lat_err) = decode(&hash)?;
//! assert!((lon - -72.747917).abs() <= lon_err);
//! assert!((lat - 45.207615).abs() <= lat_err);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeohashCell` - Decoded Cells
//!
//! ```
//! use geohash_fast::GeohashCell;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geohash_fast::GeohashError> {
//! let cell = GeohashCell::from_coord(&point! { x: -80.8501, y: 35.204 }, 4)?;
//! println!("{} centered at {:?}", cell.hash, cell.center());
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Batches
//!
//! Batch calls run on rayon and keep results index-aligned with the input.
//!
//! ```
//! use geohash_fast::{BatchOptions, decode_many, encode_many_with};
//!
//! # fn main() -> Result<(), geohash_fast::GeohashError> {
//! let options = BatchOptions::new().num_threads(2);
//! let hashes = encode_many_with(&[-76.6, -80.8501], &[47.1, 35.204], 4, &options)?;
//! assert_eq!(hashes, vec!["f23e", "dnq8"]);
//!
//! let centers = decode_many(&hashes)?;
//! assert_eq!(centers.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToGeohash` - CSV File Conversion
//!
//! ```no_run
//! use geohash_fast::{CsvGeohashConfig, CsvToGeohash, GeometryFormat};
//!
//! let config = CsvGeohashConfig::new("Longitude", "Latitude", 7)
//!     .with_cell_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_geohash_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    BatchOptions, CsvGeohashConfig, CsvToGeohash, GeohashCell, GeometryFormat,
    create_pool, csv_to_geohash_csv, decode_many, decode_many_with, encode_many, encode_many_with,
};
pub use crate::core::{
    BASE32_ALPHABET, BITS_PER_CHAR, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION, decode,
    decode_bbox, encode, encode_coord,
};
pub use crate::util::{Coordinate, GeohashError};

pub use geo_types;
