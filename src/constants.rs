//! Application constants for the seismo loader
//!
//! This module contains the column layout of frequency tables, the mode
//! selection thresholds, and the dataset paths inside fit-bundle containers.

// =============================================================================
// Frequency Table Format
// =============================================================================

/// Comment marker for frequency tables (rest of line is ignored)
pub const COMMENT_MARKER: char = '#';

/// Number of columns in a frequency-table row
pub const MODE_TABLE_COLUMNS: usize = 4;

/// Column positions within a frequency-table row
pub mod columns {
    /// Harmonic degree l
    pub const DEGREE: usize = 0;
    /// Radial order n
    pub const ORDER: usize = 1;
    /// Mode frequency (muHz)
    pub const FREQUENCY: usize = 2;
    /// Frequency uncertainty (muHz)
    pub const UNCERTAINTY: usize = 3;
}

// =============================================================================
// Mode Selection Thresholds
// =============================================================================

/// Offset subtracted from the degree count when filtering modes.
///
/// A mode is kept when its degree is below `num_of_l as f64 - DEGREE_FILTER_OFFSET`,
/// so degrees 0..num_of_l survive even when stored as floats like 1.9999 or 2.0001.
pub const DEGREE_FILTER_OFFSET: f64 = 0.5;

/// Degrees below this threshold are radial (l = 0) modes
pub const RADIAL_DEGREE_THRESHOLD: f64 = 0.5;

/// Minimum number of radial modes for a large-separation fit
pub const MIN_RADIAL_MODES: usize = 2;

// =============================================================================
// Fit Bundle Dataset Paths
// =============================================================================

/// Dataset paths inside a fit-bundle container, grouped as stored on disk
pub mod datasets {
    /// Fitting method identifier ("FQ" or "GR")
    pub const HEADER_METHOD: &str = "header/method";
    /// Regularization parameter
    pub const HEADER_REGU_PARAM: &str = "header/regu_param";
    /// Gradient tolerance for the local minimization
    pub const HEADER_TOL_GRAD: &str = "header/tol_grad";
    /// Number of initial guesses
    pub const HEADER_N_GUESS: &str = "header/n_guess";
    /// Acoustic depth of the helium ionization zone (optional)
    pub const HEADER_TAUHE: &str = "header/tauhe";
    /// Search-range half-width around tauhe (optional)
    pub const HEADER_DTAUHE: &str = "header/dtauhe";
    /// Acoustic depth of the convection-zone base (optional)
    pub const HEADER_TAUCZ: &str = "header/taucz";
    /// Search-range half-width around taucz (optional)
    pub const HEADER_DTAUCZ: &str = "header/dtaucz";

    /// Observed mode table (degree, order, frequency, uncertainty)
    pub const OBS_FREQ: &str = "obs/freq";
    /// Number of modes per harmonic degree
    pub const OBS_NUM_OF_N: &str = "obs/num_of_n";
    /// Large frequency separation (muHz)
    pub const OBS_DELTA_NU: &str = "obs/delta_nu";
    /// Lower frequency bound of the fitting range (muHz)
    pub const OBS_VMIN: &str = "obs/vmin";
    /// Upper frequency bound of the fitting range (muHz)
    pub const OBS_VMAX: &str = "obs/vmax";
    /// Second differences of the observed frequencies (optional)
    pub const OBS_FREQ_DIF2: &str = "obs/freqDif2";
    /// Inverse covariance matrix of the second differences (optional)
    pub const OBS_ICOV: &str = "obs/icov";

    /// Fitted parameter sets, one row per accepted realization
    pub const FIT_PARAM: &str = "fit/param";
    /// Chi-square of each accepted realization
    pub const FIT_CHI2: &str = "fit/chi2";
    /// Regularization term of each accepted realization
    pub const FIT_REG: &str = "fit/reg";
    /// Convergence flag of each accepted realization
    pub const FIT_IER: &str = "fit/ier";

    /// Frequency-ratio type ("r01", "r10", "r02", ...), optional
    pub const RTO_RTYPE: &str = "rto/rtype";
    /// Frequency-ratio table, present only alongside rtype
    pub const RTO_RATIO: &str = "rto/ratio";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a stored degree value denotes a radial (l = 0) mode
pub fn is_radial_degree(degree: f64) -> bool {
    degree < RADIAL_DEGREE_THRESHOLD
}

/// Exclusive upper bound on the degree of retained modes
pub fn degree_filter_threshold(num_of_l: usize) -> f64 {
    num_of_l as f64 - DEGREE_FILTER_OFFSET
}
