// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use heatgrid_text::HeuristicTextMeasurer;
use peniko::{Brush, Color};

use crate::chart::HeatmapChartSpec;
use crate::error::ChartError;
use crate::layout::Size;
use crate::mark::{HeatmapScene, RectMark, StyleRole, TextMark};
use crate::settings::HeatmapSettings;
use crate::table::{CategoryColumn, TableView, ValueColumn};

fn single_metric_table(categories: &[&str], values: &[Option<f64>]) -> TableView {
    TableView {
        category: Some(CategoryColumn {
            name: "Category".to_owned(),
            format: None,
            values: categories.iter().map(|c| Some(String::from(*c))).collect(),
        }),
        values: vec![ValueColumn {
            name: Some("M".to_owned()),
            format: None,
            values: values.to_vec(),
        }],
    }
}

fn cells(scene: &HeatmapScene) -> Vec<&RectMark> {
    scene
        .rects
        .iter()
        .filter(|r| r.role == StyleRole::GridCell)
        .collect()
}

fn swatches(scene: &HeatmapScene) -> Vec<&RectMark> {
    scene
        .rects
        .iter()
        .filter(|r| r.role == StyleRole::LegendSwatch)
        .collect()
}

fn texts_with_role(scene: &HeatmapScene, role: StyleRole) -> Vec<&TextMark> {
    scene.texts.iter().filter(|t| t.role == role).collect()
}

#[test]
fn gradient_scenario_maps_extremes_to_the_outer_buckets() {
    let table = single_metric_table(&["A", "B", "C"], &[Some(1.0), Some(5.0), Some(10.0)]);

    let mut settings = HeatmapSettings::default();
    settings.general.buckets = 3;
    settings.general.enable_colorbrewer = false;
    settings.general.gradient_start = Color::from_rgb8(255, 0, 0);
    settings.general.gradient_end = Color::from_rgb8(0, 0, 255);

    let spec = HeatmapChartSpec::new(settings, Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let cells = cells(&scene);
    assert_eq!(cells.len(), 3);

    let swatches = swatches(&scene);
    assert_eq!(swatches.len(), 3, "one legend swatch per bucket");

    // Points are emitted in category order, so cells[0] is (A, M).
    assert_eq!(
        cells[0].fill,
        Brush::Solid(Color::from_rgb8(255, 0, 0)),
        "the lowest value takes the gradient start"
    );
    assert_eq!(cells[0].fill, swatches[0].fill);
    assert_eq!(cells[2].fill, swatches[2].fill);
    assert_ne!(cells[0].fill, cells[2].fill);
    assert_ne!(cells[1].fill, cells[2].fill);
}

#[test]
fn empty_tables_build_nothing() {
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), Size::new(640.0, 480.0));

    let empty = single_metric_table(&[], &[]);
    assert!(matches!(
        spec.build(&empty, &HeuristicTextMeasurer),
        Err(ChartError::MissingData)
    ));

    assert!(matches!(
        spec.build(&TableView::default(), &HeuristicTextMeasurer),
        Err(ChartError::MissingData)
    ));
}

#[test]
fn narrow_viewports_grow_the_surface() {
    let categories: Vec<String> = (0..30).map(|i| alloc::format!("C{i}")).collect();
    let refs: Vec<&str> = categories.iter().map(String::as_str).collect();
    let values: Vec<Option<f64>> = (0..30).map(|i| Some(f64::from(i))).collect();
    let table = single_metric_table(&refs, &values);

    let viewport = Size::new(100.0, 400.0);
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), viewport);
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    assert!(scene.surface.width > viewport.width);
    let last_cell = cells(&scene)[29].rect;
    assert!(
        last_cell.x1 <= scene.surface.width + 1e-9,
        "cells stay inside the grown surface"
    );
}

#[test]
fn zero_values_render_as_zero_text() {
    let table = single_metric_table(&["A", "B"], &[Some(0.0), Some(9.0)]);
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let labels = texts_with_role(&scene, StyleRole::DataLabel);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "0");
    assert_ne!(labels[0].text, "null");
}

#[test]
fn null_cells_go_transparent_when_fill_is_off() {
    let table = single_metric_table(&["A", "B"], &[None, Some(2.0)]);

    let mut settings = HeatmapSettings::default();
    settings.general.fill_null_values_cells = false;
    let spec = HeatmapChartSpec::new(settings, Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let cells = cells(&scene);
    assert_eq!(cells[0].opacity, 0.0);
    assert_eq!(cells[1].opacity, 1.0);

    let labels = texts_with_role(&scene, StyleRole::DataLabel);
    assert_eq!(labels[0].text, "null");
}

#[test]
fn null_cells_stay_opaque_by_default() {
    let table = single_metric_table(&["A", "B"], &[None, Some(2.0)]);
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");
    assert_eq!(cells(&scene)[0].opacity, 1.0);
}

#[test]
fn legend_has_a_trailing_maximum_label() {
    let table = single_metric_table(&["A", "B", "C"], &[Some(1.0), Some(5.0), Some(10.0)]);
    let mut settings = HeatmapSettings::default();
    settings.general.buckets = 4;
    let spec = HeatmapChartSpec::new(settings, Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let labels = texts_with_role(&scene, StyleRole::LegendLabel);
    assert_eq!(labels.len(), swatches(&scene).len() + 1);
    assert_eq!(
        labels.last().expect("trailing label").text,
        "10",
        "the trailing label is the formatted maximum"
    );
}

#[test]
fn oversized_data_labels_are_suppressed_as_a_group() {
    let table = single_metric_table(&["A", "B", "C", "D"], &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    let mut settings = HeatmapSettings::default();
    // Far taller than any cell the 60 px height cap allows.
    settings.labels.font_size = 120.0;
    let spec = HeatmapChartSpec::new(settings, Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");
    assert!(texts_with_role(&scene, StyleRole::DataLabel).is_empty());
    assert_eq!(cells(&scene).len(), 4, "cells are unaffected");
}

#[test]
fn y_labels_truncate_before_wrapping() {
    let table = TableView {
        category: Some(CategoryColumn {
            name: "Category".to_owned(),
            format: None,
            values: vec![Some("A".to_owned())],
        }),
        values: vec![ValueColumn {
            name: Some("an unreasonably verbose series name".to_owned()),
            format: None,
            values: vec![Some(1.0)],
        }],
    };
    let mut settings = HeatmapSettings::default();
    settings.y_axis_labels.max_text_symbol = 10;
    let spec = HeatmapChartSpec::new(settings, Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let total: usize = texts_with_role(&scene, StyleRole::YAxisLabel)
        .iter()
        .map(|t| t.text.chars().count())
        .sum();
    assert!(total <= 10, "wrapped lines come from the truncated string");
}

#[test]
fn cell_tooltips_carry_the_category_series_value_triple() {
    let table = single_metric_table(&["A"], &[Some(3.0)]);
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), Size::new(640.0, 480.0));
    let scene = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    let tooltip = cells(&scene)[0].tooltip.as_ref().expect("cells are interactive");
    assert_eq!(tooltip[0].0, "Category");
    assert_eq!(tooltip[1].0, "Y");
    assert_eq!(tooltip[2], ("Value".to_owned(), "3".to_owned()));

    let swatch_tooltip = swatches(&scene)[0].tooltip.as_ref().expect("swatches are interactive");
    assert_eq!(swatch_tooltip[0].0, "Min value");
    assert_eq!(swatch_tooltip[1].0, "Max value");
}

#[test]
fn rebuilding_with_identical_inputs_is_idempotent() {
    let table = single_metric_table(&["A", "B"], &[Some(1.0), Some(2.0)]);
    let spec = HeatmapChartSpec::new(HeatmapSettings::default(), Size::new(640.0, 480.0));
    let a = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");
    let b = spec
        .build(&table, &HeuristicTextMeasurer)
        .expect("valid table");

    assert_eq!(a.surface, b.surface);
    assert_eq!(a.rects.len(), b.rects.len());
    assert_eq!(a.texts.len(), b.texts.len());
    for (ra, rb) in a.rects.iter().zip(&b.rects) {
        assert_eq!(ra.rect, rb.rect);
        assert_eq!(ra.fill, rb.fill);
    }
    for (ta, tb) in a.texts.iter().zip(&b.texts) {
        assert_eq!(ta.pos, tb.pos);
        assert_eq!(ta.text, tb.text);
    }
}
