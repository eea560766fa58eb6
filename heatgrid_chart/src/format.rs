// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting with sampling-based inference.
//!
//! Hosts hand over a display format string per column plus raw values; the
//! chart builds one formatter per column, once, from the format string and the
//! column's first value as a representative sample. The sample picks the
//! display unit tier (a column of millions renders as `1.2M`, not
//! `1200000`), the format string picks the decimal precision.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Display unit tiers selected from a representative sample value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayUnit {
    /// Values are rendered as-is.
    None,
    /// Values are divided by 1 000 and suffixed `K`.
    Thousands,
    /// Values are divided by 1 000 000 and suffixed `M`.
    Millions,
    /// Values are divided by 1 000 000 000 and suffixed `bn`.
    Billions,
    /// Values are divided by 1 000 000 000 000 and suffixed `T`.
    Trillions,
}

impl DisplayUnit {
    /// Picks the unit tier for a representative sample value.
    ///
    /// The thousands tier starts at 10 000 so four-digit values keep their
    /// exact rendering.
    pub fn from_sample(sample: f64) -> Self {
        let magnitude = sample.abs();
        if magnitude >= 1.0e12 {
            Self::Trillions
        } else if magnitude >= 1.0e9 {
            Self::Billions
        } else if magnitude >= 1.0e6 {
            Self::Millions
        } else if magnitude >= 1.0e4 {
            Self::Thousands
        } else {
            Self::None
        }
    }

    fn divisor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Thousands => 1.0e3,
            Self::Millions => 1.0e6,
            Self::Billions => 1.0e9,
            Self::Trillions => 1.0e12,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Thousands => "K",
            Self::Millions => "M",
            Self::Billions => "bn",
            Self::Trillions => "T",
        }
    }
}

/// A numeric formatter for one column.
///
/// Built once per column and reused for every row; the same formatter renders
/// data labels and legend breakpoints so the two stay consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueFormatter {
    precision: usize,
    unit: DisplayUnit,
}

impl ValueFormatter {
    /// Builds a formatter from a column's declared format string and its first
    /// value as a representative sample.
    ///
    /// Precision comes from the format string's decimal part (`"0.00"` → 2).
    /// Without a format string, an integral sample renders with no decimals
    /// and a fractional one with two.
    pub fn from_format(format: Option<&str>, sample: Option<f64>) -> Self {
        let sample = sample.unwrap_or(0.0);
        let precision = match format.and_then(precision_from_format) {
            Some(p) => p,
            None if sample == sample.floor() => 0,
            None => 2,
        };
        Self {
            precision,
            unit: DisplayUnit::from_sample(sample),
        }
    }

    /// Returns the inferred display unit.
    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Formats a value.
    pub fn format(&self, value: f64) -> String {
        let scaled = value / self.unit.divisor();
        format!("{:.*}{}", self.precision, scaled, self.unit.suffix())
    }

    /// Formats an optional value, rendering a missing cell as `"null"`.
    pub fn format_or_null(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => self.format(v),
            None => String::from("null"),
        }
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            precision: 0,
            unit: DisplayUnit::None,
        }
    }
}

/// Counts the `0`/`#` placeholders after the decimal point of a format string.
fn precision_from_format(format: &str) -> Option<usize> {
    let (_, decimals) = format.split_once('.')?;
    Some(
        decimals
            .chars()
            .take_while(|c| matches!(c, '0' | '#'))
            .count(),
    )
}

/// A formatter for the row-category column.
///
/// Category cells arrive as display strings; when the column declares a
/// numeric format and the cell parses as a number, the numeric formatter is
/// applied, otherwise the string passes through unchanged.
#[derive(Clone, Debug, Default)]
pub struct CategoryFormatter {
    numeric: Option<ValueFormatter>,
}

impl CategoryFormatter {
    /// Builds a category formatter from the column's format string and its
    /// first value as a representative sample.
    pub fn from_format(format: Option<&str>, sample: Option<&str>) -> Self {
        let numeric = match (format, sample.and_then(|s| s.trim().parse::<f64>().ok())) {
            (Some(f), Some(v)) => Some(ValueFormatter::from_format(Some(f), Some(v))),
            _ => None,
        };
        Self { numeric }
    }

    /// Formats one category cell.
    pub fn format(&self, raw: &str) -> String {
        if let Some(vf) = &self.numeric
            && let Ok(v) = raw.trim().parse::<f64>()
        {
            return vf.format(v);
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn precision_follows_format_string() {
        let f = ValueFormatter::from_format(Some("0.00"), Some(1.5));
        assert_eq!(f.format(1.5), "1.50");

        let f = ValueFormatter::from_format(Some("#,0.#"), Some(1.26));
        assert_eq!(f.format(1.26), "1.3");
    }

    #[test]
    fn precision_inferred_from_sample_without_format() {
        let ints = ValueFormatter::from_format(None, Some(7.0));
        assert_eq!(ints.format(7.0), "7");

        let fracs = ValueFormatter::from_format(None, Some(7.25));
        assert_eq!(fracs.format(7.25), "7.25");
    }

    #[test]
    fn display_units_follow_sample_magnitude() {
        assert_eq!(DisplayUnit::from_sample(1_234.0), DisplayUnit::None);
        assert_eq!(DisplayUnit::from_sample(45_000.0), DisplayUnit::Thousands);
        assert_eq!(DisplayUnit::from_sample(-2.0e6), DisplayUnit::Millions);
        assert_eq!(DisplayUnit::from_sample(3.0e9), DisplayUnit::Billions);
        assert_eq!(DisplayUnit::from_sample(9.9e12), DisplayUnit::Trillions);
    }

    #[test]
    fn scaled_values_carry_the_unit_suffix() {
        let f = ValueFormatter::from_format(Some("0.0"), Some(2.5e6));
        assert_eq!(f.format(2.5e6), "2.5M");
        assert_eq!(f.format(500_000.0), "0.5M");
    }

    #[test]
    fn missing_values_render_as_null() {
        let f = ValueFormatter::default();
        assert_eq!(f.format_or_null(None), "null");
        assert_eq!(f.format_or_null(Some(0.0)), "0");
    }

    #[test]
    fn category_formatter_passes_plain_strings_through() {
        let f = CategoryFormatter::from_format(None, Some("East"));
        assert_eq!(f.format("East"), "East");
    }

    #[test]
    fn category_formatter_applies_numeric_format() {
        let f = CategoryFormatter::from_format(Some("0.0"), Some("2024"));
        assert_eq!(f.format("2024"), "2024.0");
        assert_eq!(f.format("not a number"), "not a number");
    }
}
