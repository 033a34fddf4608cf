//! Analysis configuration.
//!
//! The published run uses fixed file names and chart dimensions — there are
//! no CLI flags or environment variables — so the defaults below are the
//! whole configuration surface. Everything is recomputed from the input file
//! on each run; no intermediate state is persisted.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Input dataset: one row per migration event
    pub input_path: PathBuf,

    /// Output chart file (SVG)
    pub output_path: PathBuf,

    /// Chart width in pixels
    pub plot_width: u32,

    /// Chart height in pixels
    pub plot_height: u32,

    /// Padding beyond the [0, 1] ρ range on the y-axis
    pub rho_axis_padding: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input_path: PathBuf::from("JAE_Timing_2022.csv"),
            output_path: PathBuf::from("synchrony.svg"),
            plot_width: 900,
            plot_height: 570,
            rho_axis_padding: 0.1,
        }
    }
}
