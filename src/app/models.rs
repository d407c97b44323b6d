//! Data models for asteroseismic loading
//!
//! This module contains the core data structures for representing observed
//! oscillation-mode tables and the contents of glitch-fit bundles, following
//! the on-disk layout produced by the fitting workflow.

use crate::constants;
use crate::{Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

// =============================================================================
// Observed Mode Structure
// =============================================================================

/// A single observed oscillation mode from a frequency table
///
/// One row of the whitespace-delimited input table. The harmonic degree and
/// radial order are integers in the underlying physics but are stored as
/// floating point, matching the table format.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservedMode {
    /// Harmonic degree l
    pub degree: f64,

    /// Radial order n
    pub order: f64,

    /// Mode frequency in muHz
    pub frequency: f64,

    /// Frequency uncertainty in muHz
    pub uncertainty: f64,
}

impl ObservedMode {
    /// Check whether this is a radial (l = 0) mode
    pub fn is_radial(&self) -> bool {
        constants::is_radial_degree(self.degree)
    }

    /// Nearest-integer harmonic degree
    pub fn rounded_degree(&self) -> i64 {
        self.degree.round() as i64
    }
}

// =============================================================================
// Frequency Table Structure
// =============================================================================

/// Parsed and filtered frequency table with derived summary statistics
///
/// Holds the modes retained by the degree filter in file order, together
/// with the per-degree mode counts and the large frequency separation
/// estimated from the radial modes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrequencyTable {
    /// Retained modes in file order
    pub modes: Vec<ObservedMode>,

    /// Number of retained modes per harmonic degree, indexed by degree
    pub num_of_n: Vec<usize>,

    /// Large frequency separation in muHz (slope of frequency vs. order
    /// over the radial modes)
    pub delta_nu: f64,
}

impl FrequencyTable {
    /// Total number of retained modes
    pub fn num_of_mode(&self) -> usize {
        self.modes.len()
    }

    /// Radial (l = 0) modes, in file order
    pub fn radial_modes(&self) -> Vec<&ObservedMode> {
        self.modes.iter().filter(|mode| mode.is_radial()).collect()
    }

    /// Modes with the given rounded harmonic degree, in file order
    pub fn modes_of_degree(&self, degree: usize) -> Vec<&ObservedMode> {
        self.modes
            .iter()
            .filter(|mode| mode.rounded_degree() == degree as i64)
            .collect()
    }
}

// =============================================================================
// Fit Header Structure
// =============================================================================

/// Fit configuration stored in the `header` group of a fit bundle
///
/// The acoustic-depth fields seed the glitch-parameter search and are
/// recorded only when the fit was run with explicit initial guesses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FitHeader {
    /// Fitting method identifier ("FQ" for frequencies, "GR" for second
    /// differences)
    pub method: String,

    /// Regularization parameter
    pub regu_param: f64,

    /// Gradient tolerance for the local minimization
    pub tol_grad: f64,

    /// Number of initial guesses tried per realization
    pub n_guess: i64,

    /// Acoustic depth of the helium ionization zone in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tauhe: Option<f64>,

    /// Search-range half-width around tauhe in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtauhe: Option<f64>,

    /// Acoustic depth of the convection-zone base in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taucz: Option<f64>,

    /// Search-range half-width around taucz in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtaucz: Option<f64>,
}

impl FitHeader {
    /// Helium-glitch search range (tauhe, dtauhe) if both were recorded
    pub fn helium_search_range(&self) -> Option<(f64, f64)> {
        match (self.tauhe, self.dtauhe) {
            (Some(tau), Some(dtau)) => Some((tau, dtau)),
            _ => None,
        }
    }

    /// Convection-zone search range (taucz, dtaucz) if both were recorded
    pub fn convection_zone_search_range(&self) -> Option<(f64, f64)> {
        match (self.taucz, self.dtaucz) {
            (Some(tau), Some(dtau)) => Some((tau, dtau)),
            _ => None,
        }
    }
}

// =============================================================================
// Observed Data Structure
// =============================================================================

/// Observational inputs stored in the `obs` group of a fit bundle
///
/// The mode table is kept in its on-disk layout (one row per mode, columns
/// degree, order, frequency, uncertainty). Second differences and their
/// inverse covariance are present only for fits to second differences.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservedData {
    /// Observed mode table, shape (num_of_mode, 4)
    pub freq: Array2<f64>,

    /// Number of modes per harmonic degree, indexed by degree
    pub num_of_n: Array1<i64>,

    /// Large frequency separation in muHz
    pub delta_nu: f64,

    /// Lower frequency bound of the fitting range in muHz
    pub vmin: f64,

    /// Upper frequency bound of the fitting range in muHz
    pub vmax: f64,

    /// Second differences of the observed frequencies (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_dif2: Option<Array2<f64>>,

    /// Inverse covariance matrix of the second differences (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icov: Option<Array2<f64>>,
}

impl ObservedData {
    /// Number of harmonic degrees covered by the mode set
    pub fn num_of_l(&self) -> usize {
        self.num_of_n.len()
    }

    /// Fitting frequency range as (vmin, vmax) in muHz
    pub fn frequency_range(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    /// Check whether second-difference data accompany the mode table
    pub fn has_second_differences(&self) -> bool {
        self.freq_dif2.is_some()
    }
}

// =============================================================================
// Fit Results Structure
// =============================================================================

/// Fit outputs stored in the `fit` group of a fit bundle
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FitResults {
    /// Best-fit parameter vector
    pub param: Array1<f64>,

    /// Chi-square of the best fit
    pub chi2: f64,

    /// Regularization term of the best fit
    pub reg: f64,

    /// Convergence flag from the minimizer (0 on success)
    pub ier: i64,
}

impl FitResults {
    /// Check whether the minimization converged
    pub fn converged(&self) -> bool {
        self.ier == 0
    }
}

// =============================================================================
// Ratio Data Structure
// =============================================================================

/// Frequency-ratio data stored in the `rto` group of a fit bundle
///
/// Ratio fits record both the ratio-type label and the ratio table; fits to
/// plain frequencies record neither. The two fields are populated together.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatioData {
    /// Ratio-type label ("r01", "r10", "r02", ...), if ratios were fitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtype: Option<String>,

    /// Ratio table, present together with rtype
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<Array2<f64>>,
}

impl RatioData {
    /// Validate that the ratio type and table are populated as a pair
    pub fn validate(&self) -> Result<()> {
        match (&self.rtype, &self.ratio) {
            (Some(_), None) => Err(Error::data_validation(
                "Ratio type is recorded without a ratio table".to_string(),
            )),
            (None, Some(_)) => Err(Error::data_validation(
                "Ratio table is recorded without a ratio type".to_string(),
            )),
            _ => Ok(()), // Both Some or both None is valid
        }
    }

    /// Ratio type and table when ratios were fitted
    pub fn pair(&self) -> Option<(&str, &Array2<f64>)> {
        match (&self.rtype, &self.ratio) {
            (Some(rtype), Some(ratio)) => Some((rtype.as_str(), ratio)),
            _ => None,
        }
    }
}

// =============================================================================
// Fit Bundle Structure
// =============================================================================

/// Complete contents of a glitch-fit bundle
///
/// Groups the four records read from one container file. Construction goes
/// through the fit-bundle reader; the fields mirror the on-disk groups.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FitBundle {
    /// Fit configuration (`header` group)
    pub header: FitHeader,

    /// Observational inputs (`obs` group)
    pub obs: ObservedData,

    /// Fit outputs (`fit` group)
    pub fit: FitResults,

    /// Frequency-ratio data (`rto` group)
    pub ratios: RatioData,
}
