//! Test utilities and fixtures for frequency-table parser testing
//!
//! This module provides shared table fixtures and helper functions used
//! across the parser and statistics test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::ObservedMode;


/// Helper to build an observed mode for statistics tests
pub fn mode(degree: f64, order: f64, frequency: f64, uncertainty: f64) -> ObservedMode {
    ObservedMode {
        degree,
        order,
        frequency,
        uncertainty,
    }
}

/// Helper to create a realistic solar-like mode table
///
/// Five radial orders at l = 0, three at l = 1, two at l = 2 and one l = 3
/// mode, with comment lines, a trailing comment and a blank line mixed in.
/// The radial modes follow delta_nu = 134.845 muHz on average.
pub fn create_test_table() -> String {
    r#"# Observed oscillation modes
# l   n   freq (muHz)   err (muHz)
   0   18   2764.20   0.11
   0   19   2899.15   0.12
   0   20   3033.85   0.09
   0   21   3168.90   0.14
   0   22   3303.55   0.18
   1   18   2825.70   0.10
   1   19   2960.55   0.13
   1   20   3095.35   0.12
   2   17   2756.80   0.21   # weak quadrupole mode

   2   18   2891.55   0.24
   3   17   2810.00   0.35
"#
    .to_string()
}

/// Helper to create the smallest table exercising filter, counts and fit
pub fn create_minimal_table() -> String {
    r#"0   0   1000.0   0.1
0   1   1100.0   0.1
1   0   1050.0   0.1
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
