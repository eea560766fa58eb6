// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart settings and their normalization.
//!
//! The host parses its opaque settings blob into a [`HeatmapSettings`]
//! snapshot once per update. Unknown host options never reach this crate and
//! missing ones take the `Default` values below. [`HeatmapSettings::normalized`]
//! returns a clamped copy; the snapshot itself is never mutated, so two
//! update cycles can never observe each other through a shared settings
//! object.

extern crate alloc;

use alloc::string::String;

use heatgrid_text::FontFamily;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::palette::{self, DEFAULT_PALETTE_NAME};

/// Smallest accepted bucket count.
pub const BUCKET_COUNT_MIN: usize = 1;
/// Largest accepted bucket count in gradient mode.
pub const BUCKET_COUNT_MAX: usize = 18;
/// Exclusive upper bound of the palette bucket-count availability scan.
pub const PALETTE_BUCKET_SCAN_LIMIT: usize = 14;

/// Color scale and null-cell options.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralSettings {
    /// Requested bucket count; clamped by [`HeatmapSettings::normalized`].
    pub buckets: i32,
    /// Named palette, used when `enable_colorbrewer` is set. An empty string
    /// selects the default palette.
    pub colorbrewer: String,
    /// Chooses between named palettes and the start/end gradient.
    pub enable_colorbrewer: bool,
    /// Gradient start color (lowest bucket).
    pub gradient_start: Color,
    /// Gradient end color (highest bucket).
    pub gradient_end: Color,
    /// When unset, cells with no value are drawn fully transparent.
    pub fill_null_values_cells: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            buckets: 5,
            colorbrewer: String::new(),
            enable_colorbrewer: false,
            gradient_start: Color::from_rgb8(0xfe, 0xe0, 0xd2),
            gradient_end: Color::from_rgb8(0xde, 0x2d, 0x26),
            fill_null_values_cells: true,
        }
    }
}

/// X-axis label options.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelSettings {
    /// Whether these labels are drawn at all.
    pub show: bool,
    /// Label font size.
    pub font_size: f64,
    /// Label font family.
    pub font_family: FontFamily,
    /// Label paint.
    pub fill: Brush,
}

impl Default for AxisLabelSettings {
    fn default() -> Self {
        Self {
            show: true,
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            fill: css::BLACK.into(),
        }
    }
}

/// Y-axis label options.
///
/// Same knobs as [`AxisLabelSettings`] plus the hard truncation limit applied
/// before wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct YAxisLabelSettings {
    /// Whether these labels are drawn at all.
    pub show: bool,
    /// Label font size.
    pub font_size: f64,
    /// Label font family.
    pub font_family: FontFamily,
    /// Label paint.
    pub fill: Brush,
    /// Maximum label length in characters, ellipsis included.
    pub max_text_symbol: usize,
}

impl Default for YAxisLabelSettings {
    fn default() -> Self {
        Self {
            show: true,
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            fill: css::BLACK.into(),
            max_text_symbol: 25,
        }
    }
}

/// Data (in-cell) label options.
#[derive(Clone, Debug, PartialEq)]
pub struct DataLabelSettings {
    /// Whether data labels are drawn at all.
    pub show: bool,
    /// Label font size.
    pub font_size: f64,
    /// Label font family.
    pub font_family: FontFamily,
    /// Label paint.
    pub fill: Brush,
}

impl Default for DataLabelSettings {
    fn default() -> Self {
        Self {
            show: true,
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            fill: css::BLACK.into(),
        }
    }
}

/// One immutable settings snapshot per update cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatmapSettings {
    /// Color scale and null-cell options.
    pub general: GeneralSettings,
    /// X-axis label options.
    pub x_axis_labels: AxisLabelSettings,
    /// Y-axis label options.
    pub y_axis_labels: YAxisLabelSettings,
    /// Data label options.
    pub labels: DataLabelSettings,
}

impl HeatmapSettings {
    /// Returns a copy with every numeric option clamped into its valid range.
    ///
    /// In gradient mode the bucket count is clamped into
    /// `[BUCKET_COUNT_MIN, BUCKET_COUNT_MAX]`. In palette mode an empty
    /// palette name becomes the default palette, and the bucket count is
    /// clamped into the range of counts that palette actually carries,
    /// scanned over `[BUCKET_COUNT_MIN, PALETTE_BUCKET_SCAN_LIMIT)`. Clamping
    /// is corrective: out-of-range values are normalized, never rejected.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        let general = &mut out.general;
        if !general.enable_colorbrewer {
            general.buckets = clamp_buckets(general.buckets, BUCKET_COUNT_MIN, BUCKET_COUNT_MAX);
            return out;
        }

        if general.colorbrewer.is_empty() {
            general.colorbrewer = String::from(DEFAULT_PALETTE_NAME);
        }
        let selected = palette::palette_by_name(&general.colorbrewer)
            .unwrap_or_else(palette::default_palette);
        let (min, max) = selected
            .available_bucket_range()
            .unwrap_or((BUCKET_COUNT_MIN, BUCKET_COUNT_MAX));
        general.buckets = clamp_buckets(general.buckets, min, max);
        out
    }
}

fn clamp_buckets(buckets: i32, min: usize, max: usize) -> i32 {
    let min = min as i32;
    let max = max as i32;
    buckets.clamp(min, max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn gradient_mode_clamps_into_fixed_bounds() {
        let mut settings = HeatmapSettings::default();
        settings.general.buckets = -4;
        assert_eq!(settings.normalized().general.buckets, 1);

        settings.general.buckets = 0;
        assert_eq!(settings.normalized().general.buckets, 1);

        settings.general.buckets = 1_000;
        assert_eq!(settings.normalized().general.buckets, 18);

        settings.general.buckets = 7;
        assert_eq!(settings.normalized().general.buckets, 7);
    }

    #[test]
    fn palette_mode_clamps_into_the_palette_range() {
        let mut settings = HeatmapSettings::default();
        settings.general.enable_colorbrewer = true;
        settings.general.colorbrewer = String::from("Blues");

        settings.general.buckets = 1;
        assert_eq!(settings.normalized().general.buckets, 3);

        settings.general.buckets = 17;
        assert_eq!(settings.normalized().general.buckets, 9);
    }

    #[test]
    fn empty_palette_name_defaults() {
        let mut settings = HeatmapSettings::default();
        settings.general.enable_colorbrewer = true;
        settings.general.buckets = 5;
        let normalized = settings.normalized();
        assert_eq!(normalized.general.colorbrewer, DEFAULT_PALETTE_NAME);
        assert_eq!(normalized.general.buckets, 5);
    }

    #[test]
    fn normalization_never_mutates_the_snapshot() {
        let mut settings = HeatmapSettings::default();
        settings.general.buckets = 99;
        let _ = settings.normalized();
        assert_eq!(settings.general.buckets, 99);
    }
}
