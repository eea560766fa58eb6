// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend strip generation.
//!
//! The legend explains the bucket-to-value mapping: one swatch per bucket,
//! laid out left-to-right below the grid, labeled with the bucket's lower
//! bound and trailed by the formatted maximum. Swatches carry a tooltip with
//! the bucket's value interval.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::smallvec;

use crate::color::ColorScale;
use crate::format::ValueFormatter;
use crate::layout::LayoutGeometry;
use crate::mark::{RectMark, StyleRole, TextAnchor, TextBaseline, TextMark, TooltipPairs};
use crate::settings::HeatmapSettings;

/// One legend entry: a bucket's lower bound plus its tooltip interval.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// The bucket's lower bound: the domain minimum for the first bucket,
    /// a quantile breakpoint for the rest.
    pub value: f64,
    /// Tooltip rows naming the bucket's value interval.
    pub tooltip: TooltipPairs,
}

/// Builds one entry per bucket from the scale's breakpoints.
///
/// Entries are `[min] ++ quantiles`, so their count equals the bucket count.
/// Each tooltip pairs the entry's lower bound with the next entry's value
/// (or the domain maximum for the last bucket), both rendered with zero
/// decimals.
pub fn legend_entries(scale: &ColorScale, min_value: f64, max_value: f64) -> Vec<LegendEntry> {
    let mut values = Vec::with_capacity(scale.bucket_count());
    values.push(min_value);
    values.extend_from_slice(scale.quantiles());

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let upper = values.get(i + 1).copied().unwrap_or(max_value);
            let tooltip: TooltipPairs = smallvec![
                (String::from("Min value"), format!("{value:.0}")),
                (String::from("Max value"), format!("{upper:.0}")),
            ];
            LegendEntry { value, tooltip }
        })
        .collect()
}

/// Emits the legend swatch rectangles and labels.
///
/// Swatches start at the grid's `x_offset` and advance by one legend element
/// width; labels sit below the swatch row, and the formatted domain maximum
/// trails past the last swatch.
pub(crate) fn legend_marks(
    entries: &[LegendEntry],
    scale: &ColorScale,
    geometry: &LayoutGeometry,
    formatter: &ValueFormatter,
    settings: &HeatmapSettings,
    max_value: f64,
) -> (Vec<RectMark>, Vec<TextMark>) {
    let mut rects = Vec::with_capacity(entries.len());
    let mut texts = Vec::with_capacity(entries.len() + 1);

    for (i, entry) in entries.iter().enumerate() {
        let x = geometry.legend_element_width * i as f64 + geometry.x_offset;
        let swatch = Rect::new(
            x,
            geometry.legend_cells_y,
            x + geometry.legend_element_width,
            geometry.legend_cells_y + geometry.legend_element_height,
        );
        let color = scale
            .colors()
            .get(i)
            .copied()
            .unwrap_or_else(|| scale.color_for(Some(entry.value)));
        rects.push(
            RectMark::new(swatch, StyleRole::LegendSwatch)
                .with_fill(color)
                .with_tooltip(entry.tooltip.clone()),
        );
        texts.push(label_mark(
            Point::new(x, geometry.legend_text_y),
            formatter.format(entry.value),
            settings,
        ));
    }

    let trailing_x =
        geometry.legend_element_width * entries.len() as f64 + geometry.x_offset;
    texts.push(label_mark(
        Point::new(trailing_x, geometry.legend_text_y),
        formatter.format(max_value),
        settings,
    ));

    (rects, texts)
}

fn label_mark(pos: Point, text: String, settings: &HeatmapSettings) -> TextMark {
    TextMark::new(pos, text, StyleRole::LegendLabel)
        .with_font_size(settings.labels.font_size)
        .with_family(settings.labels.font_family.clone())
        .with_fill(settings.labels.fill.clone())
        .with_anchor(TextAnchor::Start)
        .with_baseline(TextBaseline::Middle)
}
