// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heat map demos for `heatgrid_chart`.
mod svg;

use heatgrid_chart::{
    CategoryColumn, ChartError, HeatmapChartSpec, HeatmapSettings, Size, TableView, ValueColumn,
};
use heatgrid_text::HeuristicTextMeasurer;
use peniko::Color;

fn main() {
    let demos: [(&str, fn() -> Result<String, ChartError>); 3] = [
        ("heatgrid_demo_palette.svg", palette_demo),
        ("heatgrid_demo_gradient.svg", gradient_demo),
        ("heatgrid_demo_sparse.svg", sparse_demo),
    ];

    for (path, build) in demos {
        match build() {
            Ok(svg) => {
                std::fs::write(path, svg).expect("write demo svg");
                println!("wrote {path}");
            }
            Err(err) => eprintln!("skipped {path}: {err}"),
        }
    }
}

fn monthly_sales_table() -> TableView {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    TableView {
        category: Some(CategoryColumn {
            name: "Month".to_owned(),
            format: None,
            values: months.iter().map(|m| Some((*m).to_owned())).collect(),
        }),
        values: vec![
            ValueColumn {
                name: Some("Hardware".to_owned()),
                format: Some("0".to_owned()),
                values: [
                    120.0, 98.0, 143.0, 160.0, 155.0, 170.0, 188.0, 172.0, 150.0, 140.0, 132.0,
                    190.0,
                ]
                .into_iter()
                .map(Some)
                .collect(),
            },
            ValueColumn {
                name: Some("Software".to_owned()),
                format: Some("0".to_owned()),
                values: [
                    80.0, 85.0, 92.0, 88.0, 97.0, 110.0, 122.0, 119.0, 104.0, 96.0, 90.0, 130.0,
                ]
                .into_iter()
                .map(Some)
                .collect(),
            },
            ValueColumn {
                name: Some("Services and long-term support contracts".to_owned()),
                format: Some("0".to_owned()),
                values: [
                    40.0, 44.0, 39.0, 51.0, 58.0, 63.0, 61.0, 66.0, 70.0, 72.0, 75.0, 82.0,
                ]
                .into_iter()
                .map(Some)
                .collect(),
            },
        ],
    }
}

fn palette_demo() -> Result<String, ChartError> {
    let mut settings = HeatmapSettings::default();
    settings.general.enable_colorbrewer = true;
    settings.general.colorbrewer = "YlGnBu".to_owned();
    settings.general.buckets = 7;

    let spec = HeatmapChartSpec::new(settings, Size::new(860.0, 420.0));
    let scene = spec.build(&monthly_sales_table(), &HeuristicTextMeasurer)?;
    Ok(svg::to_svg_string(&scene))
}

fn gradient_demo() -> Result<String, ChartError> {
    let mut settings = HeatmapSettings::default();
    settings.general.buckets = 9;
    settings.general.gradient_start = Color::from_rgb8(0xf7, 0xfb, 0xff);
    settings.general.gradient_end = Color::from_rgb8(0x08, 0x30, 0x6b);

    let spec = HeatmapChartSpec::new(settings, Size::new(860.0, 420.0));
    let scene = spec.build(&monthly_sales_table(), &HeuristicTextMeasurer)?;
    Ok(svg::to_svg_string(&scene))
}

/// A sparse single-series table: missing cells stay transparent and the
/// viewport is narrow enough to force surface growth.
fn sparse_demo() -> Result<String, ChartError> {
    let table = TableView {
        category: Some(CategoryColumn {
            name: "Host".to_owned(),
            format: None,
            values: (1..=20).map(|i| Some(format!("host-{i:02}"))).collect(),
        }),
        values: vec![ValueColumn {
            name: Some("p99 latency".to_owned()),
            format: Some("0.0".to_owned()),
            values: (1..=20)
                .map(|i| (i % 7 != 0).then(|| 3.5 + f64::from(i) * 0.8))
                .collect(),
        }],
    };

    let mut settings = HeatmapSettings::default();
    settings.general.buckets = 4;
    settings.general.fill_null_values_cells = false;

    let spec = HeatmapChartSpec::new(settings, Size::new(360.0, 260.0));
    let scene = spec.build(&table, &HeuristicTextMeasurer)?;
    Ok(svg::to_svg_string(&scene))
}
