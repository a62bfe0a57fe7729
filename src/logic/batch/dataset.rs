//! Historical Dataset
//!
//! Monthly station records used to seed the risk map. Only the district
//! name, the month and the ten feature columns are read; station number,
//! period, year and the raw latitude/longitude duplicates are ignored.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FloodError, Result};
use crate::logic::features::FeatureVector;

/// Stations dropped before scoring (outliers in the reference dataset)
pub const EXCLUDED_STATIONS: &[&str] = &["Ishurdi", "Maijdee Court"];

/// Whether a station is on the exclusion list
pub fn is_excluded(district: &str) -> bool {
    EXCLUDED_STATIONS.contains(&district)
}

/// One dataset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Station Names", alias = "District")]
    pub district: String,
    #[serde(rename = "Month")]
    pub month: f64,
    #[serde(rename = "Max Temp")]
    pub max_temp: f64,
    #[serde(rename = "Min Temp")]
    pub min_temp: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "Relative Humidity")]
    pub relative_humidity: f64,
    #[serde(rename = "Wind Speed")]
    pub wind_speed: f64,
    #[serde(rename = "Cloud Coverage")]
    pub cloud_coverage: f64,
    #[serde(rename = "Bright Sunshine")]
    pub bright_sunshine: f64,
    #[serde(rename = "X_COR")]
    pub x_cor: f64,
    #[serde(rename = "Y_COR")]
    pub y_cor: f64,
    #[serde(rename = "ALT")]
    pub altitude: f64,
}

impl DatasetRow {
    /// Feature columns in layout order
    pub fn features(&self) -> FeatureVector {
        FeatureVector {
            max_temp: self.max_temp,
            min_temp: self.min_temp,
            rainfall: self.rainfall,
            relative_humidity: self.relative_humidity,
            wind_speed: self.wind_speed,
            cloud_coverage: self.cloud_coverage,
            bright_sunshine: self.bright_sunshine,
            x_cor: self.x_cor,
            y_cor: self.y_cor,
            altitude: self.altitude,
        }
    }

    /// Month as a calendar month number
    pub fn month_number(&self) -> Result<u32> {
        let m = self.month;
        if !m.is_finite() || m.fract() != 0.0 || !(1.0..=12.0).contains(&m) {
            return Err(FloodError::invalid(format!(
                "month must be an integer in [1, 12], got {}",
                m
            )));
        }
        Ok(m as u32)
    }
}

/// Read dataset rows from any CSV source
pub fn read_dataset<R: Read>(source: R) -> Result<Vec<DatasetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<DatasetRow>().enumerate() {
        let row = record.map_err(|e| FloodError::Dataset(format!("row {}: {}", i + 1, e)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read the dataset CSV from disk
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRow>> {
    log::info!("Loading dataset from: {}", path.display());
    let file = std::fs::File::open(path)
        .map_err(|e| FloodError::Dataset(format!("cannot open {}: {}", path.display(), e)))?;
    let rows = read_dataset(file)?;
    log::info!("Dataset loaded: {} rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Station Names,YEAR,Month,Max Temp,Min Temp,Rainfall,Relative Humidity,Wind Speed,Cloud Coverage,Bright Sunshine,Station Number,X_COR,Y_COR,LATITUDE,LONGITUDE,ALT,Period
Barisal,1949,1,29.4,12.2,0,68,0.453704,0.6,7.831915,41950,22.701002,90.353451,22.7,90.36,4,194901
Ishurdi,1949,2,33.9,15.0,14,61,0.5,1.0,8.0,41907,24.1,89.0,24.1,89.0,14,194902
";

    #[test]
    fn test_reads_named_columns_and_ignores_extras() {
        let rows = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].district, "Barisal");
        assert_eq!(rows[0].month_number().unwrap(), 1);
        assert_eq!(rows[0].features().to_array()[0], 29.4);
        assert_eq!(rows[0].features().altitude, 4.0);
    }

    #[test]
    fn test_district_alias() {
        let csv = "District,Month,Max Temp,Min Temp,Rainfall,Relative Humidity,Wind Speed,Cloud Coverage,Bright Sunshine,X_COR,Y_COR,ALT\n\
                   Dhaka,6,25,15,50,60,10,30,6,23.810331,90.412521,100\n";
        let rows = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].district, "Dhaka");
        assert_eq!(rows[0].features().y_cor, 90.412521);
    }

    #[test]
    fn test_missing_column_is_dataset_error() {
        let csv = "Station Names,Month\nDhaka,6\n";
        assert!(matches!(read_dataset(csv.as_bytes()), Err(FloodError::Dataset(_))));
    }

    #[test]
    fn test_exclusion_list() {
        assert!(is_excluded("Ishurdi"));
        assert!(is_excluded("Maijdee Court"));
        assert!(!is_excluded("Dhaka"));
        assert!(!is_excluded("Maijdee"));
    }

    #[test]
    fn test_month_number_validation() {
        let mut row = read_dataset(SAMPLE.as_bytes()).unwrap().remove(0);
        row.month = 12.0;
        assert_eq!(row.month_number().unwrap(), 12);
        row.month = 6.5;
        assert!(row.month_number().is_err());
        row.month = 13.0;
        assert!(row.month_number().is_err());
    }
}
