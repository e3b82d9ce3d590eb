use crate::api::cell::GeohashCell;
use crate::util::error::GeohashError;
use csv::StringRecord;
use geo_types::Polygon;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Text encoding for the optional cell rectangle column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text, e.g. `POLYGON((...))`
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

impl GeometryFormat {
    fn render(self, polygon: &Polygon<f64>) -> String {
        match self {
            GeometryFormat::Wkt => {
                use wkt::ToWkt;
                polygon.wkt_string()
            }
            GeometryFormat::GeoJson => geojson::Geometry::from(polygon).to_string(),
        }
    }
}

/// Settings for geohashing the longitude/latitude columns of a CSV file.
///
/// # Example
/// ```
/// use geohash_fast::{CsvGeohashConfig, GeometryFormat};
///
/// let config = CsvGeohashConfig::new("Longitude", "Latitude", 7)
///     .column_name("gh7")
///     .drop_columns(vec!["Notes".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
/// assert_eq!(config.column_name, "gh7");
/// ```
#[derive(Debug, Clone)]
pub struct CsvGeohashConfig {
    pub lon_column: String,
    pub lat_column: String,
    pub precision: usize,
    /// Header of the geohash column written first in every row
    pub column_name: String,
    /// Input columns left out of the output besides the lon/lat pair
    pub dropped_columns: Vec<String>,
    pub cell_geometry: Option<GeometryFormat>,
}

impl CsvGeohashConfig {
    pub fn new(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        precision: usize,
    ) -> Self {
        Self {
            lon_column: lon_column.into(),
            lat_column: lat_column.into(),
            precision,
            column_name: "geohash".to_string(),
            dropped_columns: Vec::new(),
            cell_geometry: None,
        }
    }

    pub fn column_name(mut self, name: impl Into<String>) -> Self {
        self.column_name = name.into();
        self
    }

    pub fn drop_columns(mut self, columns: Vec<String>) -> Self {
        self.dropped_columns = columns;
        self
    }

    /// Adds a `cell_geometry` column holding the cell rectangle.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.cell_geometry = Some(format);
        self
    }
}

/// Path extension for [`csv_to_geohash_csv`].
pub trait CsvToGeohash {
    fn to_geohash_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeohashConfig,
    ) -> Result<(), GeohashError>;
}

impl<P: AsRef<Path>> CsvToGeohash for P {
    fn to_geohash_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeohashConfig,
    ) -> Result<(), GeohashError> {
        csv_to_geohash_csv(self, output_path, config)
    }
}

/// Resolved column positions for one input file.
struct ColumnPlan {
    lon_idx: usize,
    lat_idx: usize,
    kept: Vec<usize>,
}

impl ColumnPlan {
    fn resolve(headers: &StringRecord, config: &CsvGeohashConfig) -> Result<Self, GeohashError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let lon_idx = position(&config.lon_column).ok_or_else(|| {
            GeohashError::CsvError(format!("Longitude column '{}' not found", config.lon_column))
        })?;
        let lat_idx = position(&config.lat_column).ok_or_else(|| {
            GeohashError::CsvError(format!("Latitude column '{}' not found", config.lat_column))
        })?;

        let kept: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|&(i, h)| {
                i != lon_idx && i != lat_idx && !config.dropped_columns.iter().any(|d| d == h)
            })
            .map(|(i, _)| i)
            .collect();

        let mut generated = vec![config.column_name.as_str()];
        if config.cell_geometry.is_some() {
            generated.push("cell_geometry");
        }
        if let Some(clash) = kept
            .iter()
            .filter_map(|&i| headers.get(i))
            .find(|h| generated.contains(h))
        {
            return Err(GeohashError::CsvError(format!(
                "Output column '{}' already exists in input; rename it or drop it",
                clash
            )));
        }

        Ok(Self {
            lon_idx,
            lat_idx,
            kept,
        })
    }

    fn coordinate(&self, record: &StringRecord) -> Result<(f64, f64), GeohashError> {
        let lon = parse_number(record, self.lon_idx, "longitude")?;
        let lat = parse_number(record, self.lat_idx, "latitude")?;
        Ok((lon, lat))
    }
}

fn parse_number(record: &StringRecord, idx: usize, axis: &str) -> Result<f64, GeohashError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| GeohashError::CsvError(format!("Row has no {} field", axis)))?
        .trim();

    raw.parse()
        .map_err(|_| GeohashError::CsvError(format!("Invalid {}: '{}'", axis, raw)))
}

/// Streams a CSV file with longitude/latitude columns into a CSV whose first
/// column is the geohash of each row.
///
/// The lon/lat columns and any `dropped_columns` are left out of the output;
/// the other columns follow in input order. A kept input column named like a
/// generated column is rejected rather than duplicated.
///
/// ```no_run
/// use geohash_fast::{CsvGeohashConfig, CsvToGeohash};
///
/// let config = CsvGeohashConfig::new("lon", "lat", 9);
/// "stations.csv".to_geohash_csv("stations_gh.csv", &config).unwrap();
/// ```
pub fn csv_to_geohash_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGeohashConfig,
) -> Result<(), GeohashError> {
    if config.precision == 0 {
        return Err(GeohashError::InvalidPrecision(0));
    }

    let input = File::open(csv_path).map_err(|e| GeohashError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| GeohashError::CsvError(e.to_string()))?
        .clone();
    let plan = ColumnPlan::resolve(&headers, config)?;

    let output = File::create(output_path).map_err(|e| GeohashError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(output);

    let mut out_headers = vec![config.column_name.as_str()];
    if config.cell_geometry.is_some() {
        out_headers.push("cell_geometry");
    }
    out_headers.extend(plan.kept.iter().filter_map(|&i| headers.get(i)));
    writer
        .write_record(&out_headers)
        .map_err(|e| GeohashError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| GeohashError::CsvError(e.to_string()))?;
        let cell = GeohashCell::from_coord(&plan.coordinate(&record)?, config.precision)?;

        let mut row = vec![cell.hash.clone()];
        if let Some(format) = config.cell_geometry {
            row.push(format.render(&cell.to_polygon()));
        }
        row.extend(
            plan.kept
                .iter()
                .map(|&i| record.get(i).unwrap_or_default().to_string()),
        );
        writer
            .write_record(&row)
            .map_err(|e| GeohashError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| GeohashError::IoError(e.to_string()))?;

    debug!(rows, precision = config.precision, "wrote geohash csv");
    Ok(())
}
