//! Core fit-bundle reader implementation
//!
//! This module opens the container read-only and assembles the four grouped
//! records. The file handle is scoped to the load call and closes on every
//! exit path, including early error returns.

use std::path::Path;

use hdf5::File;
use tracing::{debug, info};

use super::datasets::{
    read_optional_array2, read_optional_f64, read_optional_string, read_required_array1,
    read_required_array1_i64, read_required_array2, read_required_f64, read_required_i64,
    read_required_string,
};
use crate::app::models::{FitBundle, FitHeader, FitResults, ObservedData, RatioData};
use crate::constants::datasets as keys;
use crate::{Error, Result};

/// Load a glitch-fit bundle from an HDF5 container
///
/// Reads the `header`, `obs`, `fit` and `rto` groups into one [`FitBundle`].
/// Required datasets fail with [`Error::MissingDataset`] when absent;
/// optional datasets resolve to `None`. The ratio table is read only when
/// the ratio-type label is recorded.
pub fn load_fit(path: impl AsRef<Path>) -> Result<FitBundle> {
    let path = path.as_ref();
    info!("Loading fit bundle: {}", path.display());

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::hdf5(format!("Failed to open fit bundle {}", path.display()), e))?;

    let header = read_header(&file)?;
    let obs = read_observed_data(&file)?;
    let fit = read_fit_results(&file)?;
    let ratios = read_ratio_data(&file)?;

    info!(
        "Loaded fit bundle: method = {}, {} modes, {} parameters",
        header.method,
        obs.freq.nrows(),
        fit.param.len()
    );

    Ok(FitBundle {
        header,
        obs,
        fit,
        ratios,
    })
}

/// Assemble the fit configuration from the `header` group
fn read_header(file: &File) -> Result<FitHeader> {
    Ok(FitHeader {
        method: read_required_string(file, keys::HEADER_METHOD)?,
        regu_param: read_required_f64(file, keys::HEADER_REGU_PARAM)?,
        tol_grad: read_required_f64(file, keys::HEADER_TOL_GRAD)?,
        n_guess: read_required_i64(file, keys::HEADER_N_GUESS)?,
        tauhe: read_optional_f64(file, keys::HEADER_TAUHE)?,
        dtauhe: read_optional_f64(file, keys::HEADER_DTAUHE)?,
        taucz: read_optional_f64(file, keys::HEADER_TAUCZ)?,
        dtaucz: read_optional_f64(file, keys::HEADER_DTAUCZ)?,
    })
}

/// Assemble the observational inputs from the `obs` group
fn read_observed_data(file: &File) -> Result<ObservedData> {
    Ok(ObservedData {
        freq: read_required_array2(file, keys::OBS_FREQ)?,
        num_of_n: read_required_array1_i64(file, keys::OBS_NUM_OF_N)?,
        delta_nu: read_required_f64(file, keys::OBS_DELTA_NU)?,
        vmin: read_required_f64(file, keys::OBS_VMIN)?,
        vmax: read_required_f64(file, keys::OBS_VMAX)?,
        freq_dif2: read_optional_array2(file, keys::OBS_FREQ_DIF2)?,
        icov: read_optional_array2(file, keys::OBS_ICOV)?,
    })
}

/// Assemble the fit outputs from the `fit` group
fn read_fit_results(file: &File) -> Result<FitResults> {
    Ok(FitResults {
        param: read_required_array1(file, keys::FIT_PARAM)?,
        chi2: read_required_f64(file, keys::FIT_CHI2)?,
        reg: read_required_f64(file, keys::FIT_REG)?,
        ier: read_required_i64(file, keys::FIT_IER)?,
    })
}

/// Assemble the frequency-ratio data from the `rto` group
///
/// The ratio table is gated on the ratio-type label alone. A bundle that
/// records `rtype` must also carry `ratio`; a stray `ratio` dataset without
/// `rtype` is ignored.
fn read_ratio_data(file: &File) -> Result<RatioData> {
    let rtype = read_optional_string(file, keys::RTO_RTYPE)?;

    let ratio = match &rtype {
        Some(_) => Some(read_required_array2(file, keys::RTO_RATIO)?),
        None => {
            debug!("No ratio type recorded, skipping ratio table");
            None
        }
    };

    Ok(RatioData { rtype, ratio })
}
