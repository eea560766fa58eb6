// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heat map composition.
//!
//! [`HeatmapChartSpec`] owns the per-update inputs that are not data — the
//! settings snapshot, viewport, margins and transition hint — and composes
//! the full pipeline: convert → color scale + layout → labels + legend →
//! scene. One call per host update event; each call is a fresh, idempotent
//! recomputation, so a host that delivers updates concurrently only needs to
//! drop superseded calls and paint the most recent scene.

extern crate alloc;

use alloc::vec::Vec;

use heatgrid_text::TextMeasurer;
use kurbo::Rect;

use crate::color::ColorScale;
use crate::error::ChartError;
use crate::label;
use crate::layout::{LayoutGeometry, Margin, Size};
use crate::legend;
use crate::mark::{HeatmapScene, RectMark, StyleRole};
use crate::settings::HeatmapSettings;
use crate::table::{ChartData, TableView};

/// Default transition duration suggested to animating renderers.
const DEFAULT_DURATION_MS: u32 = 1_000;

/// A composed heat map description: settings + viewport + margins.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapChartSpec {
    /// The raw settings snapshot; normalized internally per build.
    pub settings: HeatmapSettings,
    /// Host viewport size.
    pub viewport: Size,
    /// Outer margins.
    pub margin: Margin,
    /// Transition duration hint forwarded to the scene.
    pub duration_hint_ms: u32,
}

impl HeatmapChartSpec {
    /// Creates a spec with default margins and transition hint.
    pub fn new(settings: HeatmapSettings, viewport: Size) -> Self {
        Self {
            settings,
            viewport,
            margin: Margin::default(),
            duration_hint_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Sets the outer margins.
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the transition duration hint.
    #[must_use]
    pub fn with_duration_hint_ms(mut self, duration_hint_ms: u32) -> Self {
        self.duration_hint_ms = duration_hint_ms;
        self
    }

    /// Runs one full update cycle over `table`.
    ///
    /// On [`ChartError::MissingData`] the caller should clear any previously
    /// painted scene and skip painting; every other irregularity (degenerate
    /// value range, palette misses, out-of-range settings) is normalized
    /// internally.
    pub fn build(
        &self,
        table: &TableView,
        measurer: &dyn TextMeasurer,
    ) -> Result<HeatmapScene, ChartError> {
        let data = ChartData::convert(table)?;
        let settings = self.settings.normalized();

        // An all-missing table still lays out; the scale collapses to its
        // first bucket over an empty range.
        let (min_value, max_value) = data.value_extent().unwrap_or((0.0, 0.0));
        let scale = ColorScale::build(&settings, min_value, max_value);
        let geometry =
            LayoutGeometry::arrange(&data, &settings, self.viewport, self.margin, measurer)?;

        let n_y = data.categories_y.len().max(1);
        let mut rects = Vec::with_capacity(data.points.len() + scale.bucket_count());
        for (index, point) in data.points.iter().enumerate() {
            let col = index / n_y;
            let row = index % n_y;
            let x0 = col as f64 * geometry.cell_width + geometry.x_offset;
            let y0 = row as f64 * geometry.cell_height + geometry.y_offset;
            let cell = Rect::new(
                x0,
                y0,
                x0 + geometry.cell_width,
                y0 + geometry.cell_height,
            );
            let opacity = if point.value.is_none() && !settings.general.fill_null_values_cells {
                0.0
            } else {
                1.0
            };
            rects.push(
                RectMark::new(cell, StyleRole::GridCell)
                    .with_fill(scale.color_for(point.value))
                    .with_opacity(opacity)
                    .with_tooltip(point.tooltip.clone()),
            );
        }

        let mut texts = label::y_axis_marks(&data, &settings, &geometry, measurer);
        texts.extend(label::x_axis_marks(&data, &settings, &geometry, measurer));
        texts.extend(label::data_label_marks(&data, &settings, &geometry, measurer));

        let entries = legend::legend_entries(&scale, min_value, max_value);
        let (legend_rects, legend_texts) = legend::legend_marks(
            &entries,
            &scale,
            &geometry,
            &data.y_formatter,
            &settings,
            max_value,
        );
        rects.extend(legend_rects);
        texts.extend(legend_texts);

        Ok(HeatmapScene {
            surface: geometry.surface,
            rects,
            texts,
            duration_hint_ms: self.duration_hint_ms,
        })
    }
}
