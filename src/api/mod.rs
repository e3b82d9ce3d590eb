pub mod batch;
pub mod cell;
pub mod geohash_csv;

pub use batch::{
    BatchOptions, create_pool, decode_many, decode_many_with, encode_many, encode_many_with,
};
pub use cell::GeohashCell;
pub use geohash_csv::{CsvGeohashConfig, CsvToGeohash, GeometryFormat, csv_to_geohash_csv};
