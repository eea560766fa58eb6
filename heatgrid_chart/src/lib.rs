// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical table heat map building blocks.
//!
//! This crate is a small, reusable layer between a tabular data host and a
//! drawing surface:
//! - **Conversion** normalizes a table view into a dense point grid.
//! - **Color scales** quantize values into palette or gradient buckets.
//! - **Layout** solves cell sizes, axis reservations and overflow growth
//!   against a viewport, driven by text measurement.
//! - **Guides** (axis labels, data labels, legend) are generated as plain
//!   rect/text marks with z-order hints and tooltip payloads.
//!
//! One update event maps to one [`HeatmapChartSpec::build`] call: a fresh,
//! idempotent recomputation producing a [`HeatmapScene`] the renderer paints
//! wholesale. Text shaping and layout are out of scope; text marks store
//! unshaped strings.

#![no_std]

extern crate alloc;

mod chart;
#[cfg(test)]
mod chart_tests;
mod color;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod label;
mod layout;
mod legend;
mod mark;
mod palette;
mod settings;
mod table;
mod z_order;

pub use heatgrid_text::{FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

pub use chart::HeatmapChartSpec;
pub use color::{ColorScale, ScaleQuantile};
pub use error::ChartError;
pub use format::{CategoryFormatter, DisplayUnit, ValueFormatter};
pub use label::truncate_with_ellipsis;
pub use layout::{LayoutGeometry, Margin, Size};
pub use legend::{LegendEntry, legend_entries};
pub use mark::{
    HeatmapScene, RectMark, StyleRole, TextAnchor, TextBaseline, TextMark, TooltipPairs,
};
pub use palette::{DEFAULT_PALETTE_NAME, PALETTES, Palette, default_palette, palette_by_name};
pub use settings::{
    AxisLabelSettings, BUCKET_COUNT_MAX, BUCKET_COUNT_MIN, DataLabelSettings, GeneralSettings,
    HeatmapSettings, PALETTE_BUCKET_SCAN_LIMIT, YAxisLabelSettings,
};
pub use table::{CategoryColumn, ChartData, DataPoint, TableView, ValueColumn};
pub use z_order::*;
