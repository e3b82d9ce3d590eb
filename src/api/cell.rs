use crate::core::decode::decode;
use crate::core::encode::encode_coord;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// A single geohash cell: the hash plus its decoded center and error bounds.
///
/// # Example
///
/// ```
/// use geohash_fast::GeohashCell;
///
/// # fn main() -> Result<(), geohash_fast::GeohashError> {
/// let cell = GeohashCell::from_coord(&(-72.747917, 45.207615), 5)?;
/// assert_eq!(cell.hash, "f2h30");
/// assert!(cell.contains(&(-72.747917, 45.207615)));
///
/// // Rectangle for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeohashCell {
    /// Lowercase geohash string
    pub hash: String,
    /// Longitude of the cell center
    pub longitude: f64,
    /// Latitude of the cell center
    pub latitude: f64,
    /// Half the cell width in degrees of longitude
    pub lon_error: f64,
    /// Half the cell height in degrees of latitude
    pub lat_error: f64,
}

impl GeohashCell {
    /// Create the cell of the given precision containing `coord` (x = longitude, y = latitude).
    ///
    /// Unlike [`encode`](crate::encode), a precision of 0 is rejected since it names no cell.
    pub fn from_coord(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        if precision == 0 {
            return Err(GeohashError::InvalidPrecision(precision));
        }
        let hash = encode_coord(coord, precision)?;
        Self::from_hash(&hash)
    }

    /// Create a cell from an existing geohash. Uppercase input is normalised.
    ///
    /// # Example
    /// ```
    /// use geohash_fast::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_fast::GeohashError> {
    /// let cell = GeohashCell::from_hash("DNQ8")?;
    /// assert_eq!(cell.hash, "dnq8");
    /// assert_eq!(cell.precision(), 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeohashError> {
        let (longitude, latitude, lon_error, lat_error) = decode(hash)?;

        Ok(Self {
            hash: hash.to_ascii_lowercase(),
            longitude,
            latitude,
            lon_error,
            lat_error,
        })
    }

    /// Number of characters in the hash.
    pub fn precision(&self) -> usize {
        self.hash.len()
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    pub fn bbox(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude - self.lon_error, y: self.latitude - self.lat_error },
            coord! { x: self.longitude + self.lon_error, y: self.latitude + self.lat_error },
        )
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox().to_polygon()
    }

    /// Whether `coord` lies within the cell's error bounds (edges inclusive).
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        (coord.x() - self.longitude).abs() <= self.lon_error
            && (coord.y() - self.latitude).abs() <= self.lat_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::decode_bbox;

    #[test]
    fn test_from_coord_tuple() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_coord(&(-72.747917, 45.207615), 5)?;

        assert_eq!(cell.hash, "f2h30");
        assert_eq!(cell.precision(), 5);
        assert_eq!(cell.longitude, -72.75146484375);
        assert_eq!(cell.latitude, 45.19775390625);
        Ok(())
    }

    #[test]
    fn test_from_coord_point() -> Result<(), GeohashError> {
        let from_tuple = GeohashCell::from_coord(&(-76.6, 47.1), 4)?;
        let from_point = GeohashCell::from_coord(&Point::new(-76.6, 47.1), 4)?;

        assert_eq!(from_tuple, from_point);
        assert_eq!(from_point.hash, "f23e");
        Ok(())
    }

    #[test]
    fn test_from_coord_rejects_zero_precision() {
        let result = GeohashCell::from_coord(&(0.0, 0.0), 0);
        assert_eq!(result, Err(GeohashError::InvalidPrecision(0)));
    }

    #[test]
    fn test_from_hash_lowercases() -> Result<(), GeohashError> {
        let upper = GeohashCell::from_hash("F2H30")?;
        let lower = GeohashCell::from_hash("f2h30")?;
        assert_eq!(upper, lower);
        Ok(())
    }

    #[test]
    fn test_contains_source_coordinate() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_coord(&(-80.8501, 35.204), 7)?;
        assert!(cell.contains(&(-80.8501, 35.204)));
        assert!(!cell.contains(&(-80.0, 35.204)));
        Ok(())
    }

    #[test]
    fn test_bbox_matches_decoded_bbox() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("f2h30")?;
        assert_eq!(cell.bbox(), decode_bbox("f2h30")?);
        Ok(())
    }

    #[test]
    fn test_to_polygon() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("dnq8")?;
        let polygon = cell.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5); // 4 corners + closing point
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("s")?;
        let json = serde_json::to_string(&cell).map_err(|e| GeohashError::IoError(e.to_string()))?;
        assert_eq!(
            json,
            r#"{"hash":"s","longitude":22.5,"latitude":22.5,"lon_error":22.5,"lat_error":22.5}"#
        );

        let back: GeohashCell =
            serde_json::from_str(&json).map_err(|e| GeohashError::IoError(e.to_string()))?;
        assert_eq!(back, cell);
        Ok(())
    }
}
