//! Core frequency-table parser implementation
//!
//! This module provides the main loading orchestration, handling file
//! reading, comment stripping, row parsing and the degree filter.

use std::path::Path;
use tracing::{debug, info};

use super::stats::{fit_radial_separation, mode_counts_per_degree};
use crate::app::models::{FrequencyTable, ObservedMode};
use crate::constants::{self, COMMENT_MARKER, MODE_TABLE_COLUMNS, columns};
use crate::{Error, Result};

/// Load a frequency table and derive its summary statistics
///
/// Reads the whitespace-delimited mode table at `path`, keeps the modes with
/// harmonic degree below `num_of_l`, counts the retained modes per degree and
/// estimates the large frequency separation from the radial modes.
///
/// Fails with [`Error::FileNotFound`] for an absent path,
/// [`Error::TableFormat`] for malformed rows and [`Error::DegenerateFit`]
/// when fewer than two radial modes survive the filter.
pub fn load_freq(path: impl AsRef<Path>, num_of_l: usize) -> Result<FrequencyTable> {
    let path = path.as_ref();
    info!("Loading frequency table: {}", path.display());

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    // Read file content
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io(
            format!("Failed to read frequency table {}", path.display()),
            e,
        )
    })?;

    let file_label = path.display().to_string();
    let all_modes = parse_table(&content, &file_label)?;

    // Keep modes below the degree cutoff; the half offset tolerates float
    // noise on near-integer stored degrees
    let threshold = constants::degree_filter_threshold(num_of_l);
    let modes: Vec<ObservedMode> = all_modes
        .into_iter()
        .filter(|mode| mode.degree < threshold)
        .collect();
    debug!(
        "Degree filter (l < {}) retained {} modes",
        threshold,
        modes.len()
    );

    let num_of_n = mode_counts_per_degree(&modes, num_of_l);
    let delta_nu = fit_radial_separation(&modes)?;

    info!(
        "Loaded {} modes across {} degrees, delta_nu = {:.4} muHz",
        modes.len(),
        num_of_l,
        delta_nu
    );

    Ok(FrequencyTable {
        modes,
        num_of_n,
        delta_nu,
    })
}

/// Parse the table content into mode rows
///
/// Strips `#` comments (whole-line and trailing), skips blank lines and
/// parses the remaining lines as 4-column numeric rows. Line numbers in
/// error messages are 1-based positions in the raw file.
pub fn parse_table(content: &str, file: &str) -> Result<Vec<ObservedMode>> {
    let mut modes = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let data = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line,
        };
        if data.trim().is_empty() {
            continue;
        }

        modes.push(parse_mode_row(data, file, line_no + 1)?);
    }

    Ok(modes)
}

/// Parse one data line into an observed mode
fn parse_mode_row(data: &str, file: &str, line_no: usize) -> Result<ObservedMode> {
    let fields: Vec<&str> = data.split_whitespace().collect();

    if fields.len() != MODE_TABLE_COLUMNS {
        return Err(Error::table_format(
            file,
            format!(
                "line {}: expected {} columns, found {}",
                line_no,
                MODE_TABLE_COLUMNS,
                fields.len()
            ),
        ));
    }

    let parse_field = |column: usize| -> Result<f64> {
        fields[column].parse::<f64>().map_err(|_| {
            Error::table_format(
                file,
                format!(
                    "line {}: invalid numeric value '{}' in column {}",
                    line_no,
                    fields[column],
                    column + 1
                ),
            )
        })
    };

    Ok(ObservedMode {
        degree: parse_field(columns::DEGREE)?,
        order: parse_field(columns::ORDER)?,
        frequency: parse_field(columns::FREQUENCY)?,
        uncertainty: parse_field(columns::UNCERTAINTY)?,
    })
}
