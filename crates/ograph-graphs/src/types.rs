//! Graph types and data structures

use serde::{Deserialize, Serialize};

/// Graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            width: 1000,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Data point for graphs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// A named curve to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSet {
    pub name: String,
    pub data: Vec<DataPoint>,
}

impl DataSet {
    /// Build a dataset from raw `(x, y)` pairs
    pub fn from_points(name: impl Into<String>, points: &[(f64, f64)]) -> Self {
        Self {
            name: name.into(),
            data: points.iter().map(|&(x, y)| DataPoint { x, y }).collect(),
        }
    }
}

/// Styling configuration for rendered charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Background color (hex format)
    pub background_color: String,
    /// Color of the curve and its area fill (hex format)
    pub primary_color: String,
    /// Font family for all chart text
    pub font_family: String,
    /// Font size of the chart title
    pub title_font_size: u32,
    /// Font size of axis descriptions
    pub label_font_size: u32,
    /// Whether to draw grid lines
    pub show_grid: bool,
    /// Whether to draw the series legend
    pub show_legend: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            primary_color: "#1F77B4".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 20,
            label_font_size: 14,
            show_grid: true,
            show_legend: true,
        }
    }
}
