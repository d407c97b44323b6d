//! Parser for observed oscillation-mode frequency tables
//!
//! This module loads the plain-text mode tables consumed by the glitch-fitting
//! workflow: whitespace-delimited rows of (degree, order, frequency,
//! uncertainty) with `#` comments. Loading filters the modes by harmonic
//! degree and derives the per-degree counts and the large frequency
//! separation.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File handling, comment stripping and row parsing
//! - [`stats`] - Per-degree mode counts and the large-separation estimate
//!
//! ## Usage
//!
//! ```rust
//! use seismo_loader::load_freq;
//!
//! # fn example() -> seismo_loader::Result<()> {
//! let table = load_freq("freq.dat", 3)?;
//!
//! println!("{} modes, delta_nu = {:.2} muHz",
//!          table.num_of_mode(),
//!          table.delta_nu);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use parser::load_freq;
pub use stats::{fit_radial_separation, mode_counts_per_degree};
