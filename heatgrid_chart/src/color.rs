// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantile-bucketed color scales.
//!
//! The cell fill is the only encoding channel a heat map has, so the color
//! scale does double duty: it quantizes the observed value range into bucket
//! colors and exposes its breakpoints for the legend.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::palette;
use crate::settings::HeatmapSettings;

/// A quantile scale over a numeric domain sample.
///
/// The sorted sample is partitioned into `bins` equal-population bins;
/// thresholds sit at the `k/bins` quantiles (linear interpolation between
/// sample order statistics). Values on a threshold land in the lower-indexed
/// bin. A degenerate sample (one distinct value, or empty) yields equal
/// thresholds and every value lands in bin 0.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleQuantile {
    thresholds: Vec<f64>,
    bins: usize,
}

impl ScaleQuantile {
    /// Fits a scale with `bins` bins over `sample`.
    ///
    /// Non-finite sample values are ignored. `bins` is raised to at least 1.
    pub fn fit(sample: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut thresholds = Vec::with_capacity(bins - 1);
        if !sorted.is_empty() {
            for k in 1..bins {
                thresholds.push(quantile_sorted(&sorted, k as f64 / bins as f64));
            }
        }
        Self { thresholds, bins }
    }

    /// Returns the bin index for `x`.
    pub fn bin(&self, x: f64) -> usize {
        self.thresholds.partition_point(|&t| t < x)
    }

    /// Returns the inner breakpoints (one fewer than the bin count).
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        self.bins
    }
}

/// The `p`-quantile of a sorted sample, by linear interpolation between the
/// two nearest order statistics (type 7 in the classic taxonomy).
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "0 <= h < n after the guards above"
    )]
    let i = (lo.max(0.0) as usize).min(n - 1);
    if i + 1 >= n {
        return sorted[n - 1];
    }
    sorted[i] + (h - lo) * (sorted[i + 1] - sorted[i])
}

/// A bucketed color scale: ordered bucket colors plus the quantile mapping
/// fitted to the observed value range.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    colors: Vec<Color>,
    quantile: ScaleQuantile,
}

impl ColorScale {
    /// Builds the scale for one update cycle.
    ///
    /// `settings` is expected to be normalized (see
    /// [`HeatmapSettings::normalized`]); the bucket count is still raised to
    /// at least 1 so a raw snapshot cannot produce an empty scale. Palette
    /// mode resolves the named ramp with default-palette fallback; gradient
    /// mode samples a linear ramp between the start and end colors over
    /// `[0, buckets]` at each integer bucket index.
    pub fn build(settings: &HeatmapSettings, min_value: f64, max_value: f64) -> Self {
        let general = &settings.general;
        #[allow(clippy::cast_sign_loss, reason = "clamped non-negative")]
        let buckets = general.buckets.max(1) as usize;

        let colors: Vec<Color> = if general.enable_colorbrewer {
            palette::colors_or_fallback(&general.colorbrewer, buckets).to_vec()
        } else {
            gradient_colors(general.gradient_start, general.gradient_end, buckets)
        };

        let quantile = ScaleQuantile::fit(&[min_value, max_value], colors.len());
        Self { colors, quantile }
    }

    /// Returns the ordered bucket colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.colors.len()
    }

    /// Returns the inner quantile breakpoints.
    pub fn quantiles(&self) -> &[f64] {
        self.quantile.quantiles()
    }

    /// Returns the bucket index for `value`; missing values map to bucket 0.
    pub fn bucket_for(&self, value: Option<f64>) -> usize {
        match value {
            Some(v) => self.quantile.bin(v).min(self.colors.len() - 1),
            None => 0,
        }
    }

    /// Returns the fill color for `value`.
    pub fn color_for(&self, value: Option<f64>) -> Color {
        self.colors[self.bucket_for(value)]
    }
}

/// Samples a linear start→end ramp over `[0, buckets]` at integer indexes.
///
/// Sampling at `0..buckets` (not `0..=buckets`) reproduces the host-visual
/// convention: the end color is approached but only reached in the limit.
fn gradient_colors(start: Color, end: Color, buckets: usize) -> Vec<Color> {
    let denom = buckets.max(1) as f64;
    (0..buckets.max(1))
        .map(|i| lerp_color(start, end, i as f64 / denom))
        .collect()
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    #[allow(clippy::cast_possible_truncation, reason = "interpolant fits in f32")]
    let t = t as f32;
    let [ar, ag, ab, aa] = a.components;
    let [br, bg, bb, ba] = b.components;
    Color::new([
        ar + t * (br - ar),
        ag + t * (bg - ag),
        ab + t * (bb - ab),
        aa + t * (ba - aa),
    ])
}
