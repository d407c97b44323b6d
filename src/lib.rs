//! Seismo Loader Library
//!
//! A Rust library for loading the input and output files of an asteroseismic
//! glitch-fitting workflow: plain-text tables of observed oscillation-mode
//! frequencies, and HDF5 fit bundles holding the fit configuration, the
//! observed data, the fit results and the frequency-ratio data.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited frequency tables with `#` comment handling
//! - Filtering modes by harmonic degree and counting modes per degree
//! - Estimating the large frequency separation from the radial modes
//! - Reading fit-bundle containers with required/optional dataset handling
//! - Comprehensive error handling with file and dataset context

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fit_bundle_reader;
        pub mod freq_table_parser;
    }
}

// Re-export commonly used types
pub use app::models::{
    FitBundle, FitHeader, FitResults, FrequencyTable, ObservedData, ObservedMode, RatioData,
};
pub use app::services::fit_bundle_reader::load_fit;
pub use app::services::freq_table_parser::load_freq;

/// Result type alias for the seismo loader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the two loading routines
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Frequency table malformed (non-numeric content, wrong column count)
    #[error("Frequency table error in file '{file}': {message}")]
    TableFormat { file: String, message: String },

    /// Large-separation regression undefined for the available radial modes
    #[error("Degenerate large-separation fit: {message}")]
    DegenerateFit { message: String },

    /// Model consistency error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Required dataset missing from a fit-bundle container
    #[error("Missing dataset '{key}' in fit bundle '{file}'")]
    MissingDataset { file: String, key: String },

    /// HDF5 container access error
    #[error("HDF5 error: {message}")]
    Hdf5 {
        message: String,
        #[source]
        source: hdf5::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a frequency-table format error
    pub fn table_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TableFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a degenerate-fit error
    pub fn degenerate_fit(message: impl Into<String>) -> Self {
        Self::DegenerateFit {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a missing-dataset error
    pub fn missing_dataset(file: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingDataset {
            file: file.into(),
            key: key.into(),
        }
    }

    /// Create an HDF5 error with context
    pub fn hdf5(message: impl Into<String>, source: hdf5::Error) -> Self {
        Self::Hdf5 {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<hdf5::Error> for Error {
    fn from(error: hdf5::Error) -> Self {
        Self::Hdf5 {
            message: "HDF5 operation failed".to_string(),
            source: error,
        }
    }
}
