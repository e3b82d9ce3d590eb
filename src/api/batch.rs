use crate::core::decode::decode;
use crate::core::encode::{encode, validate_precision};
use crate::util::error::GeohashError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Options for the batch operations.
///
/// # Example
/// ```
/// use geohash_fast::BatchOptions;
///
/// let options = BatchOptions::new().num_threads(4);
/// assert_eq!(options.num_threads, Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Worker threads for a dedicated pool. `None` runs on the global rayon pool.
    /// `Some(0)` is rejected when the batch runs.
    pub num_threads: Option<usize>,
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}

/// Builds a rayon thread pool of `num_threads` workers.
///
/// Zero workers is an error rather than rayon's "pick a default" value.
///
/// Usage:
/// ```
/// use geohash_fast::{create_pool, encode_many};
///
/// # fn main() -> Result<(), geohash_fast::GeohashError> {
/// let pool = create_pool(2)?;
/// let hashes = pool.install(|| encode_many(&[-76.6], &[47.1], 4))?;
/// assert_eq!(hashes, vec!["f23e"]);
/// # Ok(())
/// # }
/// ```
pub fn create_pool(num_threads: usize) -> Result<ThreadPool, GeohashError> {
    if num_threads == 0 {
        return Err(GeohashError::ThreadPool(
            "num_threads must be at least 1".to_string(),
        ));
    }
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| GeohashError::ThreadPool(e.to_string()))
}

/// Encodes parallel longitude/latitude slices at one shared precision.
///
/// Element `i` of the result equals `encode(longitudes[i], latitudes[i], precision)`.
/// Elements are encoded in parallel; on failure the error of the lowest failing
/// index is returned, wrapped in [`GeohashError::AtIndex`].
///
/// # Example
/// ```
/// use geohash_fast::encode_many;
///
/// let hashes = encode_many(&[-76.6, -80.8501], &[47.1, 35.204], 4).unwrap();
/// assert_eq!(hashes, vec!["f23e", "dnq8"]);
/// ```
///
/// # Errors
///
/// - [`GeohashError::LengthMismatch`] - the slices differ in length
/// - [`GeohashError::InvalidPrecision`] - `precision` exceeds `MAX_PRECISION`
/// - [`GeohashError::AtIndex`] - a coordinate pair is out of range
pub fn encode_many(
    longitudes: &[f64],
    latitudes: &[f64],
    precision: usize,
) -> Result<Vec<String>, GeohashError> {
    if longitudes.len() != latitudes.len() {
        return Err(GeohashError::LengthMismatch {
            longitudes: longitudes.len(),
            latitudes: latitudes.len(),
        });
    }
    validate_precision(precision)?;

    debug!(count = longitudes.len(), precision, "encoding geohash batch");

    let results: Vec<Result<String, GeohashError>> = longitudes
        .par_iter()
        .zip(latitudes.par_iter())
        .map(|(&lon, &lat)| encode(lon, lat, precision))
        .collect();

    collect_in_order(results)
}

/// Decodes a slice of geohashes to `(longitude, latitude)` centers, dropping error bounds.
///
/// # Example
/// ```
/// use geohash_fast::decode_many;
///
/// let points = decode_many(&["f2h30", "f2h30"]).unwrap();
/// assert_eq!(points[0], (-72.75146484375, 45.19775390625));
/// assert_eq!(points[0], points[1]);
/// ```
///
/// # Errors
///
/// - [`GeohashError::AtIndex`] - a hash is empty or contains an invalid character
pub fn decode_many<S>(hashes: &[S]) -> Result<Vec<(f64, f64)>, GeohashError>
where
    S: AsRef<str> + Sync,
{
    debug!(count = hashes.len(), "decoding geohash batch");

    let results: Vec<Result<(f64, f64), GeohashError>> = hashes
        .par_iter()
        .map(|hash| decode(hash.as_ref()).map(|(lon, lat, _, _)| (lon, lat)))
        .collect();

    collect_in_order(results)
}

/// [`encode_many`] on a pool sized by `options`.
pub fn encode_many_with(
    longitudes: &[f64],
    latitudes: &[f64],
    precision: usize,
    options: &BatchOptions,
) -> Result<Vec<String>, GeohashError> {
    run_with_options(options, || encode_many(longitudes, latitudes, precision))
}

/// [`decode_many`] on a pool sized by `options`.
pub fn decode_many_with<S>(
    hashes: &[S],
    options: &BatchOptions,
) -> Result<Vec<(f64, f64)>, GeohashError>
where
    S: AsRef<str> + Sync,
{
    run_with_options(options, || decode_many(hashes))
}

fn run_with_options<T, F>(options: &BatchOptions, op: F) -> Result<T, GeohashError>
where
    T: Send,
    F: FnOnce() -> Result<T, GeohashError> + Send,
{
    match options.num_threads {
        Some(num_threads) => {
            let pool = create_pool(num_threads)?;
            debug!(threads = pool.current_num_threads(), "running batch on dedicated pool");
            pool.install(op)
        }
        None => op(),
    }
}

fn collect_in_order<T>(results: Vec<Result<T, GeohashError>>) -> Result<Vec<T>, GeohashError> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|source| {
                warn!(index, error = %source, "batch element failed");
                GeohashError::AtIndex {
                    index,
                    source: Box::new(source),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_PRECISION;

    #[test]
    fn test_encode_many() -> Result<(), GeohashError> {
        let hashes = encode_many(&[-76.6, -80.8501], &[47.1, 35.204], 4)?;
        assert_eq!(hashes, vec!["f23e", "dnq8"]);
        Ok(())
    }

    #[test]
    fn test_encode_many_empty() -> Result<(), GeohashError> {
        assert!(encode_many(&[], &[], 5)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_encode_many_length_mismatch() {
        let result = encode_many(&[1.0], &[1.0, 2.0], 5);
        assert_eq!(
            result,
            Err(GeohashError::LengthMismatch {
                longitudes: 1,
                latitudes: 2
            })
        );
    }

    #[test]
    fn test_encode_many_invalid_precision() {
        let result = encode_many(&[1.0], &[1.0], MAX_PRECISION + 1);
        assert_eq!(result, Err(GeohashError::InvalidPrecision(MAX_PRECISION + 1)));
    }

    #[test]
    fn test_encode_many_reports_first_failing_index() {
        let lons = [10.0, 200.0, 0.0, -300.0];
        let lats = [10.0, 10.0, 0.0, 0.0];

        let err = encode_many(&lons, &lats, 5).unwrap_err();
        match err {
            GeohashError::AtIndex { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, GeohashError::OutOfRange { .. }));
            }
            other => panic!("Expected AtIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_many() -> Result<(), GeohashError> {
        let points = decode_many(&["f2h30", "f2h30"])?;
        assert_eq!(
            points,
            vec![
                (-72.75146484375, 45.19775390625),
                (-72.75146484375, 45.19775390625)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_decode_many_owned_strings() -> Result<(), GeohashError> {
        let hashes = vec!["dnq8".to_string(), "f23e".to_string()];
        let points = decode_many(&hashes)?;
        assert_eq!(points.len(), 2);
        Ok(())
    }

    #[test]
    fn test_decode_many_reports_first_failing_index() {
        let err = decode_many(&["f2h30", "", "f2h3!"]).unwrap_err();
        assert_eq!(
            err,
            GeohashError::AtIndex {
                index: 1,
                source: Box::new(GeohashError::EmptyInput)
            }
        );
    }

    #[test]
    fn test_with_options_matches_default_pool() -> Result<(), GeohashError> {
        let lons: Vec<f64> = (0..500).map(|i| -179.5 + i as f64 * 0.7).collect();
        let lats: Vec<f64> = (0..500).map(|i| -89.5 + i as f64 * 0.35).collect();
        let options = BatchOptions::new().num_threads(3);

        let pooled = encode_many_with(&lons, &lats, 9, &options)?;
        let global = encode_many(&lons, &lats, 9)?;
        assert_eq!(pooled, global);

        let decoded_pooled = decode_many_with(&pooled, &options)?;
        let decoded_global = decode_many(&global)?;
        assert_eq!(decoded_pooled, decoded_global);
        Ok(())
    }

    #[test]
    fn test_batch_options_serde() -> Result<(), GeohashError> {
        let options: BatchOptions =
            serde_json::from_str("{}").map_err(|e| GeohashError::IoError(e.to_string()))?;
        assert_eq!(options, BatchOptions::default());

        let options: BatchOptions = serde_json::from_str(r#"{"num_threads":2}"#)
            .map_err(|e| GeohashError::IoError(e.to_string()))?;
        assert_eq!(options.num_threads, Some(2));
        Ok(())
    }

    #[test]
    fn test_create_pool() -> Result<(), GeohashError> {
        let pool = create_pool(2)?;
        assert_eq!(pool.current_num_threads(), 2);
        Ok(())
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(create_pool(0), Err(GeohashError::ThreadPool(_))));

        let options = BatchOptions::new().num_threads(0);
        let result = encode_many_with(&[-76.6], &[47.1], 4, &options);
        assert!(matches!(result, Err(GeohashError::ThreadPool(_))));
    }
}
