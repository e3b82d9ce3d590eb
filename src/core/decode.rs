use crate::core::constants::{BITS_PER_CHAR, DECODE_TABLE, INVALID_SYMBOL};
use crate::core::range::Range;
use crate::util::error::GeohashError;
use geo_types::{Rect, coord};

/// Decodes a geohash back to its cell center and error bounds.
///
/// Each character contributes 5 bits, most significant first, alternating
/// longitude then latitude exactly as [`encode`](crate::encode) emits them.
/// Letters are matched case-insensitively, so `"F2H30"` decodes like `"f2h30"`.
///
/// # Returns
///
/// A tuple of `(longitude, latitude, lon_error, lat_error)`, where the errors
/// are half the final cell width along each axis.
///
/// # Example
/// ```
/// use geohash_fast::decode;
///
/// let (lon, lat, lon_err, lat_err) = decode("f2h30").unwrap();
/// assert_eq!(lon, -72.75146484375);
/// assert_eq!(lat, 45.19775390625);
/// assert_eq!(lon_err, 0.02197265625);
/// assert_eq!(lat_err, 0.02197265625);
/// ```
///
/// # Errors
///
/// - [`GeohashError::EmptyInput`] - `hash` is empty
/// - [`GeohashError::InvalidCharacter`] - a character is outside the alphabet
pub fn decode(hash: &str) -> Result<(f64, f64, f64, f64), GeohashError> {
    let (lon_range, lat_range) = decode_ranges(hash)?;
    Ok((
        lon_range.mid(),
        lat_range.mid(),
        lon_range.error(),
        lat_range.error(),
    ))
}

/// Decodes a geohash to the bounding box of its cell (x = longitude, y = latitude).
pub fn decode_bbox(hash: &str) -> Result<Rect<f64>, GeohashError> {
    let (lon_range, lat_range) = decode_ranges(hash)?;
    Ok(Rect::new(
        coord! { x: lon_range.min, y: lat_range.min },
        coord! { x: lon_range.max, y: lat_range.max },
    ))
}

fn decode_ranges(hash: &str) -> Result<(Range, Range), GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::EmptyInput);
    }

    let mut lon_range = Range::longitude();
    let mut lat_range = Range::latitude();
    let mut is_lon = true;

    for (position, character) in hash.chars().enumerate() {
        let symbol = symbol_value(character).ok_or(GeohashError::InvalidCharacter {
            character,
            position,
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let upper = (symbol >> shift) & 1 == 1;
            if is_lon {
                lon_range.narrow(upper);
            } else {
                lat_range.narrow(upper);
            }
            is_lon = !is_lon;
        }
    }

    Ok((lon_range, lat_range))
}

fn symbol_value(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DECODE_TABLE[character as usize] {
        INVALID_SYMBOL => None,
        value => Some(value),
    }
}
