//! Reader for HDF5 glitch-fit bundles
//!
//! This module loads the containers written by the glitch-fitting workflow:
//! one HDF5 file per fit holding the configuration (`header`), the observed
//! data (`obs`), the fit results (`fit`) and the frequency-ratio data
//! (`rto`). Required datasets fail loudly when absent; optional datasets
//! resolve to `None` through an explicit existence check.
//!
//! ## Architecture
//!
//! The reader is organized into logical components:
//! - [`reader`] - Container opening and group-by-group record assembly
//! - [`datasets`] - Utility functions for required and optional dataset access
//!
//! ## Usage
//!
//! ```rust
//! use seismo_loader::load_fit;
//!
//! # fn example() -> seismo_loader::Result<()> {
//! let bundle = load_fit("fit.hdf5")?;
//!
//! println!("method = {}, chi2 = {:.2}",
//!          bundle.header.method,
//!          bundle.fit.chi2);
//! # Ok(())
//! # }
//! ```

pub mod datasets;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main entry point for easy access
pub use reader::load_fit;
