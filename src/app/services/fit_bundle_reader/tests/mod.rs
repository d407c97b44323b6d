//! Test utilities and fixtures for fit-bundle reader testing
//!
//! This module provides helpers that write real HDF5 containers through the
//! same crate the reader uses, since the production API is read-only. The
//! canned bundles mirror the groups and datasets the fitting workflow
//! produces.

use std::path::Path;

use hdf5::types::VarLenUnicode;
use hdf5::{File, Group};
use ndarray::{Array1, Array2, arr1, arr2};
use tempfile::TempDir;


/// Helper to write an f64 scalar dataset
pub fn write_scalar_f64(group: &Group, name: &str, value: f64) {
    let dataset = group.new_dataset::<f64>().create(name).unwrap();
    dataset.write_scalar(&value).unwrap();
}

/// Helper to write an i64 scalar dataset
pub fn write_scalar_i64(group: &Group, name: &str, value: i64) {
    let dataset = group.new_dataset::<i64>().create(name).unwrap();
    dataset.write_scalar(&value).unwrap();
}

/// Helper to write a variable-length string dataset
pub fn write_string(group: &Group, name: &str, value: &str) {
    let value: VarLenUnicode = value.parse().unwrap();
    let dataset = group.new_dataset::<VarLenUnicode>().create(name).unwrap();
    dataset.write_scalar(&value).unwrap();
}

/// Helper to write a 1-D f64 dataset
pub fn write_array1_f64(group: &Group, name: &str, values: &Array1<f64>) {
    group
        .new_dataset_builder()
        .with_data(values)
        .create(name)
        .unwrap();
}

/// Helper to write a 1-D i64 dataset
pub fn write_array1_i64(group: &Group, name: &str, values: &Array1<i64>) {
    group
        .new_dataset_builder()
        .with_data(values)
        .create(name)
        .unwrap();
}

/// Helper to write a 2-D f64 dataset
pub fn write_array2_f64(group: &Group, name: &str, values: &Array2<f64>) {
    group
        .new_dataset_builder()
        .with_data(values)
        .create(name)
        .unwrap();
}

/// Observed mode table used across bundle fixtures
pub fn test_freq_table() -> Array2<f64> {
    arr2(&[
        [0.0, 20.0, 2900.0, 0.2],
        [0.0, 21.0, 3030.0, 0.2],
        [1.0, 20.0, 2960.0, 0.3],
    ])
}

/// Ratio table used across bundle fixtures
pub fn test_ratio_table() -> Array2<f64> {
    arr2(&[[20.0, 2900.0, 0.08, 0.004], [21.0, 3030.0, 0.07, 0.004]])
}

/// Write the `header` group, with or without the acoustic-depth guesses
pub fn write_header_group(file: &File, with_optionals: bool) {
    let header = file.create_group("header").unwrap();
    write_string(&header, "method", "FQ");
    write_scalar_f64(&header, "regu_param", 7.0);
    write_scalar_f64(&header, "tol_grad", 1e-3);
    write_scalar_i64(&header, "n_guess", 200);
    if with_optionals {
        write_scalar_f64(&header, "tauhe", 800.0);
        write_scalar_f64(&header, "dtauhe", 90.0);
        write_scalar_f64(&header, "taucz", 2300.0);
        write_scalar_f64(&header, "dtaucz", 450.0);
    }
}

/// Write the `obs` group, with or without second-difference data
pub fn write_obs_group(file: &File, with_optionals: bool) {
    let obs = file.create_group("obs").unwrap();
    write_array2_f64(&obs, "freq", &test_freq_table());
    write_array1_i64(&obs, "num_of_n", &arr1(&[2, 1, 0]));
    write_scalar_f64(&obs, "delta_nu", 130.0);
    write_scalar_f64(&obs, "vmin", 2800.0);
    write_scalar_f64(&obs, "vmax", 3100.0);
    if with_optionals {
        write_array2_f64(&obs, "freqDif2", &arr2(&[[0.0, 21.0, 3030.0, 1.3, 0.5]]));
        write_array2_f64(&obs, "icov", &arr2(&[[0.62]]));
    }
}

/// Write the `fit` group
pub fn write_fit_group(file: &File) {
    let fit = file.create_group("fit").unwrap();
    write_array1_f64(&fit, "param", &arr1(&[1.2, 0.4, 880.0]));
    write_scalar_f64(&fit, "chi2", 12.5);
    write_scalar_f64(&fit, "reg", 0.03);
    write_scalar_i64(&fit, "ier", 0);
}

/// Write the `rto` group, optionally leaving the ratio table out
pub fn write_ratio_group(file: &File, with_table: bool) {
    let rto = file.create_group("rto").unwrap();
    write_string(&rto, "rtype", "r02");
    if with_table {
        write_array2_f64(&rto, "ratio", &test_ratio_table());
    }
}

/// Create a bundle with every optional dataset populated
pub fn write_full_bundle(path: &Path) {
    let file = File::create(path).unwrap();
    write_header_group(&file, true);
    write_obs_group(&file, true);
    write_fit_group(&file);
    write_ratio_group(&file, true);
}

/// Create a bundle with required datasets only
pub fn write_minimal_bundle(path: &Path) {
    let file = File::create(path).unwrap();
    write_header_group(&file, false);
    write_obs_group(&file, false);
    write_fit_group(&file);
}

/// Helper to create a temporary directory for bundle files
pub fn bundle_dir() -> TempDir {
    TempDir::new().unwrap()
}
