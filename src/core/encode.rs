use crate::core::constants::{
    BASE32_ALPHABET, BITS_PER_CHAR, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION,
};
use crate::core::range::Range;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;

/// Encodes a longitude/latitude pair into a geohash of `precision` characters.
///
/// Longitude and latitude ranges are bisected alternately, longitude first,
/// and every 5 emitted bits become one character of the base-32 alphabet.
/// A coordinate lying exactly on a bisection midpoint falls into the upper half.
///
/// Precision 0 yields an empty string.
///
/// # Example
/// ```
/// use geohash_fast::encode;
///
/// let hash = encode(-72.747917, 45.207615, 5).unwrap();
/// assert_eq!(hash, "f2h30");
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - `precision` exceeds `MAX_PRECISION`
/// - [`GeohashError::OutOfRange`] - coordinate outside [-180, 180] x [-90, 90], or not finite
pub fn encode(longitude: f64, latitude: f64, precision: usize) -> Result<String, GeohashError> {
    validate_precision(precision)?;
    validate_coordinate(longitude, latitude)?;
    Ok(encode_unchecked(longitude, latitude, precision))
}

/// Encodes any [`Coordinate`] (x = longitude, y = latitude).
///
/// # Example
/// ```
/// use geohash_fast::encode_coord;
/// use geo_types::Point;
///
/// # fn main() -> Result<(), geohash_fast::GeohashError> {
/// let from_tuple = encode_coord(&(-76.6, 47.1), 4)?;
/// let from_point = encode_coord(&Point::new(-76.6, 47.1), 4)?;
/// assert_eq!(from_tuple, "f23e");
/// assert_eq!(from_tuple, from_point);
/// # Ok(())
/// # }
/// ```
pub fn encode_coord(coord: &impl Coordinate, precision: usize) -> Result<String, GeohashError> {
    encode(coord.x(), coord.y(), precision)
}

pub(crate) fn validate_precision(precision: usize) -> Result<(), GeohashError> {
    if precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

pub(crate) fn validate_coordinate(longitude: f64, latitude: f64) -> Result<(), GeohashError> {
    // NaN fails both range checks
    let lon_ok = (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude);
    let lat_ok = (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude);
    if !(lon_ok && lat_ok) {
        return Err(GeohashError::OutOfRange {
            longitude,
            latitude,
        });
    }
    Ok(())
}

fn encode_unchecked(longitude: f64, latitude: f64, precision: usize) -> String {
    let mut lon_range = Range::longitude();
    let mut lat_range = Range::latitude();
    let mut is_lon = true;
    let mut hash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut symbol = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let bit = if is_lon {
                lon_range.bisect(longitude)
            } else {
                lat_range.bisect(latitude)
            };
            symbol = (symbol << 1) | bit as u8;
            is_lon = !is_lon;
        }
        hash.push(BASE32_ALPHABET[symbol as usize] as char);
    }

    hash
}
