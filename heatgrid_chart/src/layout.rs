// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry solving.
//!
//! The layout pass turns a converted data snapshot, a settings snapshot and a
//! viewport into concrete cell/axis/legend geometry. It is a measure-style
//! pass: text metrics reserve the axis strips, then cell sizes are solved
//! under the aspect-ratio, data-label and clamp constraints, and finally the
//! drawing surface grows past the viewport where the grid or legend would
//! otherwise clip. The pass is a pure function of its inputs: identical
//! inputs yield identical geometry.

extern crate alloc;

use alloc::string::String;

use heatgrid_text::{TextMeasurer, TextStyle};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;
use crate::label;
use crate::settings::HeatmapSettings;
use crate::table::ChartData;

/// Extra width reserved past the measured y-axis labels.
const Y_AXIS_EXTRA_MARGIN: f64 = 5.0;
/// Fixed cell aspect ratio (height per width) before clamping.
const CELL_HEIGHT_WIDTH_RATIO: f64 = 0.5;
/// Hard cap on cell height.
const CELL_MAX_HEIGHT: f64 = 60.0;
/// Hard cap on cell width, as a multiple of the final cell height.
const CELL_MAX_WIDTH_FACTOR: f64 = 3.0;
/// Fraction of the viewport width the legend strip may occupy.
const LEGEND_WIDTH_RATIO: f64 = 2.0 / 3.0;
/// Gap between the grid and the legend strip, in cell heights.
const LEGEND_ROW_OFFSET: f64 = 0.5;

/// A width/height pair in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in surface coordinate units.
    pub width: f64,
    /// Height in surface coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fixed outer margins around the chart content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin.
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            left: 5.0,
            right: 10.0,
            top: 10.0,
            bottom: 15.0,
        }
    }
}

/// Solved geometry for one update cycle.
///
/// All coordinates are absolute surface coordinates (margins included).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGeometry {
    /// Final cell width.
    pub cell_width: f64,
    /// Final cell height.
    pub cell_height: f64,
    /// Left edge of the grid: left margin plus the y-axis strip.
    pub x_offset: f64,
    /// Top edge of the grid: top margin plus the x-axis strip.
    pub y_offset: f64,
    /// Height reserved for x-axis labels (zero when hidden).
    pub x_axis_height: f64,
    /// Width reserved for y-axis labels (zero when hidden).
    pub y_axis_width: f64,
    /// Line height of a y-axis label in its font.
    pub y_axis_height: f64,
    /// Width of one legend swatch.
    pub legend_element_width: f64,
    /// Height of one legend swatch.
    pub legend_element_height: f64,
    /// Top edge of the legend swatch row.
    pub legend_cells_y: f64,
    /// Vertical midline of the legend label row.
    pub legend_text_y: f64,
    /// The outer margins the geometry was solved with.
    pub margin: Margin,
    /// Drawing surface size, grown past the viewport when the grid or legend
    /// would otherwise clip.
    pub surface: Size,
}

impl LayoutGeometry {
    /// Solves the grid layout.
    ///
    /// `settings` is expected to be normalized so the bucket count used for
    /// legend sizing is already clamped. Fails with
    /// [`ChartError::MissingData`] when either category list is empty, which
    /// would otherwise divide by zero at the cell-width step.
    pub fn arrange(
        data: &ChartData,
        settings: &HeatmapSettings,
        viewport: Size,
        margin: Margin,
        measurer: &dyn TextMeasurer,
    ) -> Result<Self, ChartError> {
        let n_x = data.categories_x.len();
        let n_y = data.categories_y.len();
        if n_x == 0 || n_y == 0 {
            return Err(ChartError::MissingData);
        }

        // The inner viewport drives sizing; overflow checks below compare
        // against the full host viewport.
        let inner_width = (viewport.width - margin.left - margin.right).max(0.0);

        let longest_y = data
            .categories_y
            .iter()
            .max_by_key(|name| name.chars().count())
            .map(String::as_str)
            .unwrap_or("");

        let y_style = TextStyle {
            font_size: settings.y_axis_labels.font_size,
            font_family: settings.y_axis_labels.font_family.clone(),
        };
        let x_style = TextStyle {
            font_size: settings.x_axis_labels.font_size,
            font_family: settings.x_axis_labels.font_family.clone(),
        };
        let label_style = TextStyle {
            font_size: settings.labels.font_size,
            font_family: settings.labels.font_family.clone(),
        };

        let y_axis_width = if settings.y_axis_labels.show {
            let truncated =
                label::truncate_with_ellipsis(longest_y, settings.y_axis_labels.max_text_symbol);
            measurer.measure(truncated.trim(), &y_style).advance_width + Y_AXIS_EXTRA_MARGIN
        } else {
            0.0
        };
        let x_axis_height = if settings.x_axis_labels.show {
            measurer.measure(longest_y.trim(), &x_style).line_height()
        } else {
            0.0
        };
        let y_axis_height = measurer.measure(longest_y.trim(), &y_style).line_height();

        let mut cell_width = ((inner_width - y_axis_width) / n_x as f64).floor().max(0.0);
        let mut cell_height = cell_width * CELL_HEIGHT_WIDTH_RATIO;

        // Cells never clip their own data labels: the widest rendered label
        // is a floor on the cell box.
        let longest_label = data
            .points
            .iter()
            .max_by_key(|p| p.value_label.chars().count())
            .map(|p| p.value_label.as_str())
            .unwrap_or("");
        let label_metrics = measurer.measure(longest_label, &label_style);
        if settings.labels.show {
            cell_width = cell_width.max(label_metrics.advance_width);
            cell_height = cell_height.max(label_metrics.line_height());
        }

        cell_height = cell_height.min(CELL_MAX_HEIGHT);
        cell_width = cell_width.min(cell_height * CELL_MAX_WIDTH_FACTOR);

        let x_offset = margin.left + y_axis_width;
        let y_offset = margin.top + x_axis_height;

        let buckets = f64::from(settings.general.buckets.max(1));
        let legend_element_width =
            ((inner_width * LEGEND_WIDTH_RATIO - x_offset) / buckets).max(0.0);
        let legend_element_height = cell_height;

        let legend_cells_y =
            margin.top + cell_height * (n_y as f64 + LEGEND_ROW_OFFSET) + x_axis_height;
        let legend_text_y = margin.top - cell_height * 0.5
            + cell_height * (n_y as f64 + LEGEND_ROW_OFFSET)
            + legend_element_height * 2.0
            + x_axis_height;

        let grid_right = n_x as f64 * cell_width + x_offset;
        let mut surface = Size::new(viewport.width.max(0.0), viewport.height.max(0.0));
        if grid_right > surface.width {
            surface.width = grid_right;
        }
        let legend_bottom = legend_text_y + cell_height;
        if legend_bottom > surface.height {
            surface.height = legend_bottom;
        }

        Ok(Self {
            cell_width,
            cell_height,
            x_offset,
            y_offset,
            x_axis_height,
            y_axis_width,
            y_axis_height,
            legend_element_width,
            legend_element_height,
            legend_cells_y,
            legend_text_y,
            margin,
            surface,
        })
    }
}
