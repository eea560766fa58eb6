// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for heat map layout.
//!
//! `HeatGrid` needs to measure text to perform **layout**: the y-axis strip is
//! as wide as the longest category label, cells grow to fit their data labels,
//! and overlong labels are clipped with an ellipsis. Shaping and glyph layout
//! stay downstream, so chart code depends on a tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names and
//!   ellipsized strings), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// A minimal text measurement interface used by heat map layout.
///
/// Layout calls this to reserve axis strips, size grid cells around their data
/// labels, and clip labels that do not fit.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Clip `text` with a trailing ellipsis so it fits within `max_width`.
    ///
    /// Returns the input unchanged when it already fits. When nothing fits, the
    /// bare ellipsis is returned rather than an empty string, so a clipped
    /// label stays visibly clipped.
    ///
    /// The provided implementation trims characters from the end until the
    /// prefix plus `…` measures within budget; implementations with cheaper
    /// platform primitives may override it.
    fn ellipsize(&self, text: &str, max_width: f64, style: &TextStyle) -> String {
        if self.measure(text, style).advance_width <= max_width {
            return String::from(text);
        }
        let mut keep: usize = text.chars().count();
        while keep > 0 {
            keep -= 1;
            let mut candidate: String = text.chars().take(keep).collect();
            candidate.truncate(candidate.trim_end().len());
            candidate.push('…');
            if self.measure(&candidate, style).advance_width <= max_width {
                return candidate;
            }
        }
        String::from("…")
    }
}

/// Text styling inputs relevant to measurement.
///
/// This is just enough to make heat map layout consistent: the settings panel
/// exposes a font size and family per label group, and nothing else affects
/// the reserved extents.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        let descent = 0.2 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            descent,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_length_and_size() {
        let measurer = HeuristicTextMeasurer;
        let narrow = measurer.measure("ab", &TextStyle::new(10.0));
        let wide = measurer.measure("abcd", &TextStyle::new(10.0));
        let large = measurer.measure("ab", &TextStyle::new(20.0));
        assert!(narrow.advance_width < wide.advance_width);
        assert!(narrow.advance_width < large.advance_width);
        assert!((narrow.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ellipsize_returns_input_when_it_fits() {
        let measurer = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        assert_eq!(measurer.ellipsize("short", 1000.0, &style), "short");
    }

    #[test]
    fn ellipsize_never_exceeds_budget() {
        let measurer = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let out = measurer.ellipsize("a rather long category name", 60.0, &style);
        assert!(out.ends_with('…'));
        assert!(measurer.measure(&out, &style).advance_width <= 60.0);
    }

    #[test]
    fn ellipsize_degrades_to_bare_ellipsis() {
        let measurer = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        assert_eq!(measurer.ellipsize("wide", 0.0, &style), "…");
    }
}
