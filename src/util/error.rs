/// Error type for geohash operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Longitude must lie in [-180, 180] and latitude in [-90, 90].
    OutOfRange { longitude: f64, latitude: f64 },
    /// Precision is above `MAX_PRECISION`.
    InvalidPrecision(usize),
    /// A character of the hash is not part of the base-32 alphabet.
    InvalidCharacter { character: char, position: usize },
    /// Batch longitude and latitude sequences differ in length.
    LengthMismatch { longitudes: usize, latitudes: usize },
    /// Attempted to decode a zero-length hash.
    EmptyInput,
    /// A batch element failed; `index` is the position of the first failing element.
    AtIndex {
        index: usize,
        source: Box<GeohashError>,
    },
    /// The rayon worker pool could not be built.
    ThreadPool(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl GeohashError {
    /// Returns the innermost error, unwrapping any batch index context.
    pub fn root(&self) -> &GeohashError {
        match self {
            GeohashError::AtIndex { source, .. } => source.root(),
            other => other,
        }
    }
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::OutOfRange {
                longitude,
                latitude,
            } => write!(
                f,
                "Coordinate out of range: longitude {}, latitude {}",
                longitude, latitude
            ),
            GeohashError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            GeohashError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid geohash character '{}' at position {}",
                character, position
            ),
            GeohashError::LengthMismatch {
                longitudes,
                latitudes,
            } => write!(
                f,
                "Length mismatch: {} longitudes, {} latitudes",
                longitudes, latitudes
            ),
            GeohashError::EmptyInput => write!(f, "Empty geohash"),
            GeohashError::AtIndex { index, source } => {
                write!(f, "Element {}: {}", index, source)
            }
            GeohashError::ThreadPool(msg) => write!(f, "Thread pool error: {}", msg),
            GeohashError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeohashError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeohashError::AtIndex { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
