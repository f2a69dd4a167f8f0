//! Result Table Module
//! Loads the simulation result CSV and extracts column projections using Polars.

use crate::data::SeriesChoice;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default input file, resolved against the working directory.
pub const RESULT_FILE: &str = "result.csv";

/// Every column a result table must carry, six per side.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "Left Period",
    "Left Arrival Rate",
    "Left Number of Cars",
    "Left Average Waiting Time",
    "Left Maximum Waiting Time",
    "Left Time to Clear",
    "Right Period",
    "Right Arrival Rate",
    "Right Number of Cars",
    "Right Average Waiting Time",
    "Right Maximum Waiting Time",
    "Right Time to Clear",
];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read {}: {source}", path.display())]
    DataAccess {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("{}: required columns missing or not numeric: {}", path.display(), missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },
}

/// An immutable simulation result table with the twelve required columns.
pub struct ResultTable {
    df: DataFrame,
    path: PathBuf,
}

impl ResultTable {
    /// Load a CSV file and verify its schema.
    ///
    /// A file that cannot be opened or parsed yields `DataAccess`; a table
    /// missing any required column yields `Schema` listing every absent name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref().to_path_buf();

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| TableError::DataAccess {
                path: path.clone(),
                source,
            })?;

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| df.column(name).is_err())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::Schema { path, missing });
        }

        Ok(Self { df, path })
    }

    /// Extract one named column as an ordered sequence of values.
    ///
    /// Row order matches the source file; cells that are null or not castable
    /// to a number come back as NaN.
    pub fn projection(&self, column: &str) -> Result<Vec<f64>, TableError> {
        let series = self
            .df
            .column(column)
            .and_then(|col| col.cast(&DataType::Float64))
            .map_err(|_| TableError::Schema {
                path: self.path.clone(),
                missing: vec![column.to_string()],
            })?;
        let ca = series.f64().map_err(|source| TableError::DataAccess {
            path: self.path.clone(),
            source,
        })?;

        Ok((0..ca.len())
            .map(|i| ca.get(i).unwrap_or(f64::NAN))
            .collect())
    }

    /// Assemble the (X, Y, Z) points of the active series, row-aligned.
    /// Rows with any non-finite coordinate are dropped.
    pub fn series_points(&self, choice: SeriesChoice) -> Result<Vec<[f64; 3]>, TableError> {
        let xs = self.projection(&choice.x_column())?;
        let ys = self.projection(&choice.y_column())?;
        let zs = self.projection(&choice.z_column())?;

        Ok(xs
            .iter()
            .zip(ys.iter())
            .zip(zs.iter())
            .filter(|((x, y), z)| x.is_finite() && y.is_finite() && z.is_finite())
            .map(|((&x, &y), &z)| [x, y, z])
            .collect())
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Metric, Side};
    use std::io::Write;

    /// A two-row table carrying all twelve columns. The Right side holds the
    /// distinctive values checked below.
    fn write_sample_csv(dir: &Path) -> PathBuf {
        let header = REQUIRED_COLUMNS.join(",");
        let rows = [
            "10,0.1,4,2.5,8.0,30.0,1,0.5,3,1.5,6.0,20.0",
            "20,0.2,6,3.5,9.0,40.0,2,0.7,5,2.5,7.0,25.0",
        ];
        let path = dir.join("result.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", header).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    #[test]
    fn projections_preserve_row_count_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let table = ResultTable::load(write_sample_csv(dir.path())).unwrap();

        assert_eq!(table.row_count(), 2);
        for column in REQUIRED_COLUMNS {
            assert_eq!(table.projection(column).unwrap().len(), 2);
        }
        assert_eq!(table.projection("Left Period").unwrap(), vec![10.0, 20.0]);
    }

    #[test]
    fn default_series_points_match_source_rows() {
        let dir = tempfile::tempdir().unwrap();
        let table = ResultTable::load(write_sample_csv(dir.path())).unwrap();

        let points = table.series_points(SeriesChoice::default()).unwrap();
        assert_eq!(points, vec![[1.0, 0.5, 3.0], [2.0, 0.7, 5.0]]);
    }

    #[test]
    fn switching_metric_changes_only_z_values() {
        let dir = tempfile::tempdir().unwrap();
        let table = ResultTable::load(write_sample_csv(dir.path())).unwrap();

        let choice = SeriesChoice {
            side: Side::Right,
            metric: Metric::TimeToClear,
        };
        let points = table.series_points(choice).unwrap();
        assert_eq!(points, vec![[1.0, 0.5, 20.0], [2.0, 0.7, 25.0]]);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let header: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "Right Period")
            .collect();
        let path = dir.path().join("partial.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", header.join(",")).unwrap();
        writeln!(file, "1,2,3,4,5,6,7,8,9,10,11").unwrap();

        let err = match ResultTable::load(&path) {
            Err(e) => e,
            Ok(_) => panic!("expected schema error"),
        };
        match &err {
            TableError::Schema { missing, .. } => {
                assert_eq!(missing, &vec!["Right Period".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
        // The same variant also reports present-but-unusable columns, so the
        // message must not claim the column is absent outright.
        let msg = err.to_string();
        assert!(msg.contains("Right Period"));
        assert!(msg.contains("missing or not numeric"));
    }

    #[test]
    fn nonexistent_file_is_a_data_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(
            ResultTable::load(&path),
            Err(TableError::DataAccess { .. })
        ));
    }

    #[test]
    fn reloading_the_same_file_yields_identical_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_csv(dir.path());

        let first = ResultTable::load(&path)
            .unwrap()
            .series_points(SeriesChoice::default())
            .unwrap();
        let second = ResultTable::load(&path)
            .unwrap()
            .series_points(SeriesChoice::default())
            .unwrap();
        assert_eq!(first, second);
    }
}
