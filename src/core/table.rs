//! Flat table export and import
//!
//! Rows are written and read as CSV through their serde derives, so the
//! column headers are exactly the struct field names (or their renames).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::model::{FlowEdge, SalesSummaryRow};

/// Table I/O error
#[derive(Error, Debug)]
pub enum TableError {
    /// The file could not be opened or flushed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV for the expected row type
    #[error("Malformed table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has a header but no rows
    #[error("Table {0} has no rows")]
    Empty(PathBuf),
}

/// Write rows to a CSV file, replacing any previous content
pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), TableError> {
    let csv_err = |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = rows.len(), "table written");
    Ok(())
}

/// Read every row of a CSV file
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TableError> {
    let csv_err = |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(csv_err)?;

    if rows.is_empty() {
        return Err(TableError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), rows = rows.len(), "table read");
    Ok(rows)
}

pub fn write_flows(path: &Path, flows: &[FlowEdge]) -> Result<(), TableError> {
    write_rows(path, flows)
}

pub fn read_flows(path: &Path) -> Result<Vec<FlowEdge>, TableError> {
    read_rows(path)
}

pub fn write_summary(path: &Path, summary: &[SalesSummaryRow]) -> Result<(), TableError> {
    write_rows(path, summary)
}

pub fn read_summary(path: &Path) -> Result<Vec<SalesSummaryRow>, TableError> {
    read_rows(path)
}
