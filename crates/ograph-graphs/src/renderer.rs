//! Graph rendering trait and the growth-curve chart implementation

use crate::{DataSet, GraphConfig};
use async_trait::async_trait;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;

use ograph_common::{OGraphError, Result};

/// Curves whose largest finite value exceeds this switch to a log-scale
/// y axis, keeping fast-growing classes visually legible.
pub const LOG_SCALE_THRESHOLD: f64 = 1000.0;

/// Lower bound of the log-scale y axis; sampled zeros are clipped up to it
/// since they cannot be placed on a logarithmic coordinate.
const LOG_FLOOR: f64 = 0.1;

/// Trait for rendering graphs
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Render a graph to encoded PNG bytes
    async fn render_to_bytes(&self, config: &GraphConfig, dataset: &DataSet) -> Result<Vec<u8>>;

    /// Render a graph to a file path, creating the parent directory if absent
    async fn render_to_file(
        &self,
        config: &GraphConfig,
        dataset: &DataSet,
        path: &Path,
    ) -> Result<()> {
        let bytes = self.render_to_bytes(config, dataset).await?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "rendered chart written to file");
        Ok(())
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }
}

/// Renders a single growth curve as a line chart with a shaded area fill
pub struct CurveChartRenderer;

impl CurveChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Drop non-finite samples; the unbounded tail of exponential/factorial
    /// curves is clipped out of the plotted range rather than drawn.
    fn finite_points(dataset: &DataSet) -> Vec<(f64, f64)> {
        dataset
            .data
            .iter()
            .filter(|p| p.y.is_finite())
            .map(|p| (p.x, p.y))
            .collect()
    }
}

impl Default for CurveChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphRenderer for CurveChartRenderer {
    async fn render_to_bytes(&self, config: &GraphConfig, dataset: &DataSet) -> Result<Vec<u8>> {
        let points = Self::finite_points(dataset);
        if points.is_empty() {
            return Err(OGraphError::graph("No data to render"));
        }

        let bg_color = self.parse_color(&config.style.background_color);
        let curve_color = self.parse_color(&config.style.primary_color);

        let x_min = points[0].0;
        let mut x_max = points[points.len() - 1].0;
        if x_max <= x_min {
            // collapsed grid (n_max = 1); widen so plotters gets a non-empty range
            x_max = x_min + 1.0;
        }

        let max_value = points.iter().map(|&(_, y)| y).fold(0.0, f64::max);
        let use_log_scale = max_value > LOG_SCALE_THRESHOLD;

        let title_font = (
            config.style.font_family.as_str(),
            config.style.title_font_size,
        );
        let label_font = (
            config.style.font_family.as_str(),
            config.style.label_font_size,
        );

        let mut buffer = vec![0u8; (config.width * config.height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (config.width, config.height))
                .into_drawing_area();
            root.fill(&bg_color)?;

            if use_log_scale {
                // zeros cannot be placed on a log axis; clip them up to the floor
                let clipped: Vec<(f64, f64)> = points
                    .iter()
                    .map(|&(x, y)| (x, y.max(LOG_FLOOR)))
                    .collect();
                let y_max = max_value * 1.05;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&config.title, title_font)
                    .margin(10)
                    .x_label_area_size(45)
                    .y_label_area_size(70)
                    .build_cartesian_2d(x_min..x_max, (LOG_FLOOR..y_max).log_scale())?;

                let mut mesh = chart.configure_mesh();
                mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
                    .y_desc(config.y_label.as_deref().unwrap_or(""))
                    .axis_desc_style(label_font);
                if !config.style.show_grid {
                    mesh.disable_mesh();
                }
                mesh.draw()?;

                chart.draw_series(AreaSeries::new(
                    clipped.iter().copied(),
                    LOG_FLOOR,
                    curve_color.mix(0.1),
                ))?;
                chart
                    .draw_series(LineSeries::new(
                        clipped.iter().copied(),
                        curve_color.stroke_width(2),
                    ))?
                    .label(&dataset.name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 14, y)], curve_color)
                    });

                if config.style.show_legend {
                    chart
                        .configure_series_labels()
                        .background_style(WHITE.mix(0.8))
                        .border_style(&BLACK)
                        .draw()?;
                }
            } else {
                let y_max = (max_value * 1.05).max(1.05);

                let mut chart = ChartBuilder::on(&root)
                    .caption(&config.title, title_font)
                    .margin(10)
                    .x_label_area_size(45)
                    .y_label_area_size(70)
                    .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

                let mut mesh = chart.configure_mesh();
                mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
                    .y_desc(config.y_label.as_deref().unwrap_or(""))
                    .axis_desc_style(label_font);
                if !config.style.show_grid {
                    mesh.disable_mesh();
                }
                mesh.draw()?;

                chart.draw_series(AreaSeries::new(
                    points.iter().copied(),
                    0.0,
                    curve_color.mix(0.1),
                ))?;
                chart
                    .draw_series(LineSeries::new(
                        points.iter().copied(),
                        curve_color.stroke_width(2),
                    ))?
                    .label(&dataset.name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 14, y)], curve_color)
                    });

                if config.style.show_legend {
                    chart
                        .configure_series_labels()
                        .background_style(WHITE.mix(0.8))
                        .border_style(&BLACK)
                        .draw()?;
                }
            }

            root.present()?;
        }

        let img = image::RgbImage::from_raw(config.width, config.height, buffer)
            .ok_or_else(|| OGraphError::graph("Rendered buffer has unexpected size"))?;
        let mut encoded = Vec::new();
        img.write_to(&mut Cursor::new(&mut encoded), image::ImageOutputFormat::Png)
            .map_err(|e| OGraphError::graph_with_source("PNG encoding failed", e))?;

        tracing::debug!(
            title = %config.title,
            log_scale = use_log_scale,
            bytes = encoded.len(),
            "rendered growth curve"
        );
        Ok(encoded)
    }
}
