//! Table styling.
//!
//! Styling is fixed and identical across all tables in all reports. That
//! uniformity is a contract, so the style lives in one named
//! configuration value rather than per-table literals.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Shade {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Shade = Shade::new(0.0, 0.0, 0.0);
    pub const GREY: Shade = Shade::new(0.5, 0.5, 0.5);
    pub const WHITESMOKE: Shade = Shade::new(0.96, 0.96, 0.96);
    pub const BEIGE: Shade = Shade::new(0.96, 0.96, 0.86);
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// The style applied uniformly to every table in every report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStyle {
    /// Header row background.
    pub header_background: Shade,
    /// Header row text color.
    pub header_text: Shade,
    /// Body row background.
    pub body_background: Shade,
    /// Grid line weight in points, drawn around every cell.
    pub grid_weight: f64,
    /// Alignment for all cells, header and body.
    pub alignment: Alignment,
    /// PostScript name of the header row font.
    pub header_font: &'static str,
}

impl TableStyle {
    /// The single shared style: grey header with whitesmoke bold text,
    /// beige body, 1pt black grid, everything centered.
    pub fn standard() -> &'static TableStyle {
        static STANDARD: Lazy<TableStyle> = Lazy::new(|| TableStyle {
            header_background: Shade::GREY,
            header_text: Shade::WHITESMOKE,
            body_background: Shade::BEIGE,
            grid_weight: 1.0,
            alignment: Alignment::Center,
            header_font: "Helvetica-Bold",
        });
        &STANDARD
    }
}
