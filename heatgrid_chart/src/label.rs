// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and data label layout.
//!
//! Labels are the only marks whose geometry depends on their own content:
//! x-axis labels clip to one cell width, y-axis labels hard-truncate and then
//! word-wrap into the axis strip, and data labels are suppressed wholesale
//! when a cell cannot hold a line of text. All policies resolve here; the
//! emitted text marks carry final strings and positions.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use heatgrid_text::{TextMeasurer, TextStyle};
use kurbo::Point;

use crate::layout::LayoutGeometry;
use crate::mark::{StyleRole, TextAnchor, TextBaseline, TextMark};
use crate::settings::HeatmapSettings;
use crate::table::ChartData;

/// Line advance between wrapped label lines, in em.
const WRAP_LINE_HEIGHT: f64 = 1.1;

/// Hard-truncates `text` to at most `max_symbols` characters, appending an
/// ellipsis when anything was cut.
///
/// The kept prefix is `max_symbols - 3` characters with trailing whitespace
/// trimmed, so the result (ellipsis included) never exceeds `max_symbols`.
pub fn truncate_with_ellipsis(text: &str, max_symbols: usize) -> String {
    if text.chars().count() <= max_symbols {
        return String::from(text);
    }
    let keep = max_symbols.saturating_sub(3);
    let prefix: String = text.chars().take(keep).collect();
    let mut out = String::from(prefix.trim());
    out.push('…');
    out
}

/// Greedily packs words into lines no wider than `max_width`.
///
/// A word is moved to the next line when adding it would exceed the budget;
/// a single word wider than the budget keeps its own line (callers clip it
/// afterwards). Returns at least one line for non-empty input.
fn wrap_words(
    text: &str,
    max_width: f64,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            String::from(word)
        } else {
            let mut c = line.clone();
            c.push(' ');
            c.push_str(word);
            c
        };
        if !line.is_empty() && measurer.measure(&candidate, style).advance_width > max_width {
            lines.push(line);
            line = String::from(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Emits x-axis labels: one per category, formatted at conversion time and
/// clipped to one cell width, centered over its column.
pub(crate) fn x_axis_marks(
    data: &ChartData,
    settings: &HeatmapSettings,
    geometry: &LayoutGeometry,
    measurer: &dyn TextMeasurer,
) -> Vec<TextMark> {
    if !settings.x_axis_labels.show {
        return Vec::new();
    }
    let style = TextStyle {
        font_size: settings.x_axis_labels.font_size,
        font_family: settings.x_axis_labels.font_family.clone(),
    };
    let y = geometry.margin.top + geometry.x_axis_height * 0.5;
    data.categories_x
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let text = measurer.ellipsize(category, geometry.cell_width, &style);
            let x = i as f64 * geometry.cell_width + geometry.x_offset + geometry.cell_width * 0.5;
            TextMark::new(Point::new(x, y), text, StyleRole::XAxisLabel)
                .with_font_size(style.font_size)
                .with_family(style.font_family.clone())
                .with_fill(settings.x_axis_labels.fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
        })
        .collect()
}

/// Emits y-axis labels: one mark per wrapped line.
///
/// Each label is hard-truncated to `max_text_symbol` characters first, then
/// word-wrapped into the `cell_width + x_offset` budget; wrapped lines
/// advance by 1.1 em. Every line is ellipsis-clipped to the same budget in
/// case a single word still overflows.
pub(crate) fn y_axis_marks(
    data: &ChartData,
    settings: &HeatmapSettings,
    geometry: &LayoutGeometry,
    measurer: &dyn TextMeasurer,
) -> Vec<TextMark> {
    if !settings.y_axis_labels.show {
        return Vec::new();
    }
    let style = TextStyle {
        font_size: settings.y_axis_labels.font_size,
        font_family: settings.y_axis_labels.font_family.clone(),
    };
    let budget = geometry.cell_width + geometry.x_offset;
    let line_advance = WRAP_LINE_HEIGHT * style.font_size;

    let mut out = Vec::new();
    for (i, category) in data.categories_y.iter().enumerate() {
        let truncated = truncate_with_ellipsis(category, settings.y_axis_labels.max_text_symbol);
        let row_center =
            i as f64 * geometry.cell_height + geometry.y_offset + geometry.cell_height * 0.5;
        for (line_index, line) in wrap_words(&truncated, budget, &style, measurer)
            .into_iter()
            .enumerate()
        {
            let text = measurer.ellipsize(&line, budget, &style);
            let y = row_center + line_index as f64 * line_advance;
            out.push(
                TextMark::new(Point::new(geometry.margin.left, y), text, StyleRole::YAxisLabel)
                    .with_font_size(style.font_size)
                    .with_family(style.font_family.clone())
                    .with_fill(settings.y_axis_labels.fill.clone())
                    .with_anchor(TextAnchor::Start)
                    .with_baseline(TextBaseline::Middle),
            );
        }
    }
    out
}

/// Emits data labels, one per point, centered in their cells.
///
/// Returns nothing when data labels are hidden or when the measured label
/// height exceeds the cell height (labels are suppressed as a group rather
/// than clipped vertically). A value of exactly zero renders as `"0"`; a
/// missing value renders as `"null"`; anything wider than the cell is
/// ellipsis-clipped.
pub(crate) fn data_label_marks(
    data: &ChartData,
    settings: &HeatmapSettings,
    geometry: &LayoutGeometry,
    measurer: &dyn TextMeasurer,
) -> Vec<TextMark> {
    if !settings.labels.show {
        return Vec::new();
    }
    let style = TextStyle {
        font_size: settings.labels.font_size,
        font_family: settings.labels.font_family.clone(),
    };
    let longest = data
        .points
        .iter()
        .max_by_key(|p| p.value_label.chars().count())
        .map(|p| p.value_label.as_str())
        .unwrap_or("");
    if measurer.measure(longest, &style).line_height() > geometry.cell_height {
        return Vec::new();
    }

    let n_y = data.categories_y.len().max(1);
    data.points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let col = index / n_y;
            let row = index % n_y;
            let text = if point.value == Some(0.0) {
                String::from("0")
            } else {
                measurer.ellipsize(&point.value_label, geometry.cell_width, &style)
            };
            let x =
                col as f64 * geometry.cell_width + geometry.x_offset + geometry.cell_width * 0.5;
            let y =
                row as f64 * geometry.cell_height + geometry.y_offset + geometry.cell_height * 0.5;
            TextMark::new(Point::new(x, y), text, StyleRole::DataLabel)
                .with_font_size(style.font_size)
                .with_family(style.font_family.clone())
                .with_fill(settings.labels.fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use heatgrid_text::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn truncation_never_exceeds_the_symbol_budget() {
        for limit in 4..12 {
            let out = truncate_with_ellipsis("a moderately long label", limit);
            assert!(
                out.chars().count() <= limit,
                "{out:?} exceeds {limit} symbols"
            );
            assert!(out.ends_with('…'));
        }
    }

    #[test]
    fn short_labels_pass_through_untruncated() {
        assert_eq!(truncate_with_ellipsis("Sales", 25), "Sales");
        assert_eq!(truncate_with_ellipsis("Sales", 5), "Sales");
    }

    #[test]
    fn truncation_trims_trailing_whitespace_before_the_ellipsis() {
        // Keeping 5 of "total value" would end on a space.
        assert_eq!(truncate_with_ellipsis("total value", 8), "total…");
    }

    #[test]
    fn wrapping_packs_words_greedily() {
        let measurer = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        // 6 px per char: "alpha beta" is 60 px, over a 50 px budget.
        let lines = wrap_words("alpha beta gamma", 50.0, &style, &measurer);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "alpha");

        let wide = wrap_words("alpha beta gamma", 1_000.0, &style, &measurer);
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0], "alpha beta gamma");
    }

    #[test]
    fn single_overlong_words_keep_their_own_line() {
        let measurer = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let lines = wrap_words("incomprehensibilities ok", 30.0, &style, &measurer);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "incomprehensibilities");
    }
}
