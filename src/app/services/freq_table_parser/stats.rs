//! Summary statistics derived from a filtered mode table
//!
//! This module computes the per-degree mode counts and estimates the large
//! frequency separation as the slope of an ordinary least-squares fit of
//! frequency against radial order over the radial modes.

use tracing::debug;

use crate::app::models::ObservedMode;
use crate::constants::MIN_RADIAL_MODES;
use crate::{Error, Result};

/// Count the retained modes for each harmonic degree
///
/// Entry `i` of the result is the number of modes whose stored degree rounds
/// to `i`. Degrees in well-formed tables are near-integer, so the nearest
/// integer is unambiguous.
pub fn mode_counts_per_degree(modes: &[ObservedMode], num_of_l: usize) -> Vec<usize> {
    (0..num_of_l)
        .map(|degree| {
            modes
                .iter()
                .filter(|mode| mode.rounded_degree() == degree as i64)
                .count()
        })
        .collect()
}

/// Estimate the large frequency separation from the radial modes
///
/// Fits `frequency = delta_nu * order + offset` by ordinary least squares
/// over the modes with degree l = 0 and returns the slope. The fit is
/// reported as degenerate when fewer than two radial modes are available or
/// when all radial orders coincide.
pub fn fit_radial_separation(modes: &[ObservedMode]) -> Result<f64> {
    let radial: Vec<&ObservedMode> = modes.iter().filter(|mode| mode.is_radial()).collect();

    if radial.len() < MIN_RADIAL_MODES {
        return Err(Error::degenerate_fit(format!(
            "need at least {} radial modes for the large-separation fit, found {}",
            MIN_RADIAL_MODES,
            radial.len()
        )));
    }

    let n = radial.len() as f64;
    let order_mean = radial.iter().map(|mode| mode.order).sum::<f64>() / n;
    let freq_mean = radial.iter().map(|mode| mode.frequency).sum::<f64>() / n;

    // Closed-form slope of the first-degree least-squares polynomial
    let mut order_var = 0.0;
    let mut cross = 0.0;
    for mode in &radial {
        let d_order = mode.order - order_mean;
        order_var += d_order * d_order;
        cross += d_order * (mode.frequency - freq_mean);
    }

    if order_var == 0.0 {
        return Err(Error::degenerate_fit(
            "radial orders have zero variance, slope is undefined".to_string(),
        ));
    }

    let delta_nu = cross / order_var;
    debug!(
        "Large-separation fit over {} radial modes: delta_nu = {:.4} muHz",
        radial.len(),
        delta_nu
    );

    Ok(delta_nu)
}
