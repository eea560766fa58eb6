// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input table model and conversion into chart data.
//!
//! The host delivers a table-shaped data view: exactly one category column
//! (grid columns) and one value column per grid row. Conversion densifies
//! this into one [`DataPoint`] per (category, series) pair, in row-major ×
//! column order, and builds the per-column formatters the rest of the
//! pipeline reuses. The converted snapshot is owned by one update cycle and
//! rebuilt wholesale on the next.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::smallvec;

use crate::error::ChartError;
use crate::format::{CategoryFormatter, ValueFormatter};
use crate::mark::TooltipPairs;

/// The category column: one display string per source row.
#[derive(Clone, Debug, Default)]
pub struct CategoryColumn {
    /// Column display name.
    pub name: String,
    /// Declared display format, if any.
    pub format: Option<String>,
    /// Cell values; `None` marks an undefined entry.
    pub values: Vec<Option<String>>,
}

/// One numeric value column.
#[derive(Clone, Debug, Default)]
pub struct ValueColumn {
    /// Column display name; columns without one are skipped entirely.
    pub name: Option<String>,
    /// Declared display format, if any.
    pub format: Option<String>,
    /// Cell values aligned with the category column; `None` marks a missing
    /// cell.
    pub values: Vec<Option<f64>>,
}

/// A table-shaped data view as delivered by the host.
#[derive(Clone, Debug, Default)]
pub struct TableView {
    /// The single category column, if the host bound one.
    pub category: Option<CategoryColumn>,
    /// Value columns in source order.
    pub values: Vec<ValueColumn>,
}

/// One grid cell's worth of data.
#[derive(Clone, Debug)]
pub struct DataPoint {
    /// Formatted category (grid column key).
    pub category_x: String,
    /// Value column display name (grid row key).
    pub category_y: String,
    /// The raw value; `None` for a missing cell.
    pub value: Option<f64>,
    /// The value formatted with its column's formatter.
    pub value_label: String,
    /// Tooltip rows: category, series, formatted value.
    pub tooltip: TooltipPairs,
}

/// The converted data snapshot for one update cycle.
#[derive(Clone, Debug)]
pub struct ChartData {
    /// Points in row-major × column order; exactly
    /// `categories_x.len() * categories_y.len()` entries, and the point for
    /// `(x index, y index)` sits at `x * categories_y.len() + y`.
    pub points: Vec<DataPoint>,
    /// Unique formatted category values in source order.
    pub categories_x: Vec<String>,
    /// Value column display names in source order.
    pub categories_y: Vec<String>,
    /// Formatter for x-axis labels.
    pub x_formatter: CategoryFormatter,
    /// Formatter for legend labels (the first value column's formatter).
    pub y_formatter: ValueFormatter,
}

impl ChartData {
    /// Converts a table view into the dense point grid.
    ///
    /// Rows with an undefined category and rows repeating an earlier category
    /// are skipped (first occurrence wins), keeping (x, y) keys unique.
    /// Columns without a display name are skipped. An input with no category
    /// column, no usable value column, or no usable row fails with
    /// [`ChartError::MissingData`].
    pub fn convert(table: &TableView) -> Result<Self, ChartError> {
        let Some(category) = table.category.as_ref() else {
            return Err(ChartError::MissingData);
        };

        let named: Vec<(&str, &ValueColumn)> = table
            .values
            .iter()
            .filter_map(|column| column.name.as_deref().map(|name| (name, column)))
            .collect();
        if named.is_empty() {
            return Err(ChartError::MissingData);
        }

        let x_formatter = CategoryFormatter::from_format(
            category.format.as_deref(),
            category.values.iter().flatten().next().map(String::as_str),
        );
        // One formatter per column, sampled from that column's first value.
        let formatters: Vec<ValueFormatter> = named
            .iter()
            .map(|(_, column)| {
                ValueFormatter::from_format(
                    column.format.as_deref(),
                    column.values.first().copied().flatten(),
                )
            })
            .collect();
        let y_formatter = formatters[0];

        let mut categories_x = Vec::new();
        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        for (row, value) in category.values.iter().enumerate() {
            let Some(raw) = value else {
                continue;
            };
            let formatted = x_formatter.format(raw);
            if seen.insert(formatted.clone()) {
                categories_x.push(formatted);
                rows.push(row);
            }
        }
        if categories_x.is_empty() {
            return Err(ChartError::MissingData);
        }

        let categories_y: Vec<String> =
            named.iter().map(|(name, _)| String::from(*name)).collect();

        let mut points = Vec::with_capacity(categories_x.len() * categories_y.len());
        for (category_x, &row) in categories_x.iter().zip(&rows) {
            for ((name, column), formatter) in named.iter().zip(&formatters) {
                let value = column.values.get(row).copied().flatten();
                let value_label = formatter.format_or_null(value);
                let tooltip: TooltipPairs = smallvec![
                    (String::from("Category"), category_x.clone()),
                    (String::from("Y"), String::from(*name)),
                    (String::from("Value"), value_label.clone()),
                ];
                points.push(DataPoint {
                    category_x: category_x.clone(),
                    category_y: String::from(*name),
                    value,
                    value_label,
                    tooltip,
                });
            }
        }

        Ok(Self {
            points,
            categories_x,
            categories_y,
            x_formatter,
            y_formatter,
        })
    }

    /// Returns the `(min, max)` of all finite point values.
    ///
    /// `None` when every cell is missing or non-finite.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            let Some(v) = point.value else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::borrow::ToOwned;
    use alloc::vec;

    use super::*;

    fn month_table() -> TableView {
        TableView {
            category: Some(CategoryColumn {
                name: "Month".to_owned(),
                format: None,
                values: vec![
                    Some("Jan".to_owned()),
                    Some("Feb".to_owned()),
                    Some("Mar".to_owned()),
                ],
            }),
            values: vec![
                ValueColumn {
                    name: Some("Sales".to_owned()),
                    format: None,
                    values: vec![Some(10.0), Some(20.0), Some(30.0)],
                },
                ValueColumn {
                    name: Some("Returns".to_owned()),
                    format: None,
                    values: vec![Some(1.0), None, Some(3.0)],
                },
            ],
        }
    }

    #[test]
    fn point_grid_is_dense_and_unique() {
        let data = ChartData::convert(&month_table()).expect("valid table");
        assert_eq!(
            data.points.len(),
            data.categories_x.len() * data.categories_y.len()
        );

        let mut keys = HashSet::new();
        for point in &data.points {
            assert!(
                keys.insert((point.category_x.clone(), point.category_y.clone())),
                "duplicate key {:?}/{:?}",
                point.category_x,
                point.category_y
            );
        }
    }

    #[test]
    fn emission_order_is_row_major_then_column() {
        let data = ChartData::convert(&month_table()).expect("valid table");
        assert_eq!(data.points[0].category_x, "Jan");
        assert_eq!(data.points[0].category_y, "Sales");
        assert_eq!(data.points[1].category_y, "Returns");
        assert_eq!(data.points[2].category_x, "Feb");
    }

    #[test]
    fn missing_cells_keep_none_and_label_null() {
        let data = ChartData::convert(&month_table()).expect("valid table");
        let feb_returns = &data.points[3];
        assert_eq!(feb_returns.category_x, "Feb");
        assert_eq!(feb_returns.value, None);
        assert_eq!(feb_returns.value_label, "null");
    }

    #[test]
    fn tooltip_carries_category_series_and_value() {
        let data = ChartData::convert(&month_table()).expect("valid table");
        let first = &data.points[0];
        assert_eq!(first.tooltip.len(), 3);
        assert_eq!(first.tooltip[0], ("Category".to_owned(), "Jan".to_owned()));
        assert_eq!(first.tooltip[1], ("Y".to_owned(), "Sales".to_owned()));
        assert_eq!(first.tooltip[2], ("Value".to_owned(), "10".to_owned()));
    }

    #[test]
    fn undefined_categories_and_duplicates_are_skipped() {
        let mut table = month_table();
        let category = table.category.as_mut().expect("category set");
        category.values = vec![
            Some("Jan".to_owned()),
            None,
            Some("Jan".to_owned()),
            Some("Feb".to_owned()),
        ];
        for column in &mut table.values {
            column.values = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
        }
        let data = ChartData::convert(&table).expect("valid table");
        assert_eq!(data.categories_x, vec!["Jan", "Feb"]);
        // First occurrence wins: Jan keeps row 0's values.
        assert_eq!(data.points[0].value, Some(1.0));
        assert_eq!(data.points[2].value, Some(4.0));
    }

    #[test]
    fn unnamed_value_columns_are_skipped() {
        let mut table = month_table();
        table.values[1].name = None;
        let data = ChartData::convert(&table).expect("valid table");
        assert_eq!(data.categories_y, vec!["Sales"]);
        assert_eq!(data.points.len(), 3);
    }

    #[test]
    fn empty_inputs_report_missing_data() {
        assert!(matches!(
            ChartData::convert(&TableView::default()),
            Err(ChartError::MissingData)
        ));

        let mut no_values = month_table();
        no_values.values.clear();
        assert!(matches!(
            ChartData::convert(&no_values),
            Err(ChartError::MissingData)
        ));

        let mut no_rows = month_table();
        no_rows
            .category
            .as_mut()
            .expect("category set")
            .values
            .clear();
        assert!(matches!(
            ChartData::convert(&no_rows),
            Err(ChartError::MissingData)
        ));
    }

    #[test]
    fn value_extent_ignores_missing_cells() {
        let data = ChartData::convert(&month_table()).expect("valid table");
        assert_eq!(data.value_extent(), Some((1.0, 30.0)));
    }
}
