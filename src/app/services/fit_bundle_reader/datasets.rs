//! Dataset access utilities for fit-bundle containers
//!
//! This module provides helper functions for reading required and optional
//! datasets from an open container with proper error handling. Required
//! datasets report absence as [`Error::MissingDataset`]; optional datasets
//! are probed with an existence check first, so absence never surfaces as
//! an error.

use hdf5::types::VarLenUnicode;
use hdf5::{Dataset, File};
use ndarray::{Array1, Array2};
use tracing::debug;

use crate::{Error, Result};

/// Read a required f64 scalar dataset
pub fn read_required_f64(file: &File, key: &str) -> Result<f64> {
    require_dataset(file, key)?
        .read_scalar::<f64>()
        .map_err(|e| read_error(file, key, e))
}

/// Read a required i64 scalar dataset
pub fn read_required_i64(file: &File, key: &str) -> Result<i64> {
    require_dataset(file, key)?
        .read_scalar::<i64>()
        .map_err(|e| read_error(file, key, e))
}

/// Read a required variable-length string dataset
pub fn read_required_string(file: &File, key: &str) -> Result<String> {
    let value: VarLenUnicode = require_dataset(file, key)?
        .read_scalar()
        .map_err(|e| read_error(file, key, e))?;
    Ok(value.as_str().to_string())
}

/// Read a required 1-D f64 dataset
pub fn read_required_array1(file: &File, key: &str) -> Result<Array1<f64>> {
    require_dataset(file, key)?
        .read_1d::<f64>()
        .map_err(|e| read_error(file, key, e))
}

/// Read a required 1-D i64 dataset
pub fn read_required_array1_i64(file: &File, key: &str) -> Result<Array1<i64>> {
    require_dataset(file, key)?
        .read_1d::<i64>()
        .map_err(|e| read_error(file, key, e))
}

/// Read a required 2-D f64 dataset
pub fn read_required_array2(file: &File, key: &str) -> Result<Array2<f64>> {
    require_dataset(file, key)?
        .read_2d::<f64>()
        .map_err(|e| read_error(file, key, e))
}

/// Read an optional f64 scalar dataset, `None` when the key is absent
pub fn read_optional_f64(file: &File, key: &str) -> Result<Option<f64>> {
    if !dataset_exists(file, key) {
        debug!("Optional dataset '{}' not present", key);
        return Ok(None);
    }
    read_required_f64(file, key).map(Some)
}

/// Read an optional variable-length string dataset, `None` when absent
pub fn read_optional_string(file: &File, key: &str) -> Result<Option<String>> {
    if !dataset_exists(file, key) {
        debug!("Optional dataset '{}' not present", key);
        return Ok(None);
    }
    read_required_string(file, key).map(Some)
}

/// Read an optional 2-D f64 dataset, `None` when the key is absent
pub fn read_optional_array2(file: &File, key: &str) -> Result<Option<Array2<f64>>> {
    if !dataset_exists(file, key) {
        debug!("Optional dataset '{}' not present", key);
        return Ok(None);
    }
    read_required_array2(file, key).map(Some)
}

/// Check whether a dataset exists at the given key path
///
/// A missing intermediate group counts as absence, so probing `rto/rtype`
/// in a bundle without an `rto` group is safe.
pub fn dataset_exists(file: &File, key: &str) -> bool {
    file.link_exists(key)
}

/// Open a required dataset, reporting absence as a missing-dataset error
fn require_dataset(file: &File, key: &str) -> Result<Dataset> {
    if !dataset_exists(file, key) {
        return Err(Error::missing_dataset(file.filename(), key));
    }
    file.dataset(key).map_err(|e| read_error(file, key, e))
}

/// Build an HDF5 error with file and key context
fn read_error(file: &File, key: &str, source: hdf5::Error) -> Error {
    Error::hdf5(
        format!(
            "Failed to read dataset '{}' from '{}'",
            key,
            file.filename()
        ),
        source,
    )
}
