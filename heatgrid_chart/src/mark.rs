// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain mark types consumed by the drawing surface.
//!
//! The heat map core does not paint. Each update produces a [`HeatmapScene`]:
//! flat lists of rectangle and text marks with positions, wrap/clip and colors
//! already resolved. A rendering collaborator (retained-mode scene graph,
//! immediate-mode canvas, declarative UI tree) binds these to its primitives
//! and may animate toward the new state using the scene's duration hint.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use heatgrid_text::FontFamily;
use kurbo::{Point, Rect};
use peniko::Brush;
use smallvec::SmallVec;

use crate::layout::Size;
use crate::z_order;

/// Horizontal text anchor relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the start (left edge) of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the end (right edge) of the text.
    End,
}

/// Vertical text reference relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the vertical midline.
    Middle,
    /// The position is the top (hanging baseline).
    Hanging,
}

/// Semantic style role of a mark.
///
/// Roles replace renderer-specific styling hooks (CSS class names in a web
/// renderer, theme keys elsewhere): the renderer decides what, if anything, a
/// role maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// A grid cell rectangle.
    GridCell,
    /// An x-axis category label.
    XAxisLabel,
    /// A y-axis category label (one mark per wrapped line).
    YAxisLabel,
    /// A value label drawn inside a cell.
    DataLabel,
    /// A legend swatch rectangle.
    LegendSwatch,
    /// A legend breakpoint label.
    LegendLabel,
}

/// An ordered list of `(display name, value)` tooltip rows.
///
/// Cells carry three rows (category, series, value); legend swatches carry
/// two (bucket lower and upper bound), so the payload stays inline.
pub type TooltipPairs = SmallVec<[(String, String); 3]>;

/// A filled rectangle mark.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Semantic style role.
    pub role: StyleRole,
    /// Rendering order hint.
    pub z_index: i32,
    /// Tooltip rows for interactive surfaces, if this mark is interactive.
    pub tooltip: Option<TooltipPairs>,
}

impl RectMark {
    /// Creates a fully opaque rectangle mark with a role-appropriate z-index.
    pub fn new(rect: Rect, role: StyleRole) -> Self {
        Self {
            rect,
            fill: Brush::default(),
            opacity: 1.0,
            role,
            z_index: default_z_index(role),
            tooltip: None,
        }
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the fill opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Attaches tooltip rows.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPairs) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// A text mark (unshaped).
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Preferred font family.
    pub font_family: FontFamily,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical reference.
    pub baseline: TextBaseline,
    /// Semantic style role.
    pub role: StyleRole,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMark {
    /// Creates a text mark with default styling and a role-appropriate z-index.
    pub fn new(pos: Point, text: impl Into<String>, role: StyleRole) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            fill: Brush::default(),
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            role,
            z_index: default_z_index(role),
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the horizontal anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical reference.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}

fn default_z_index(role: StyleRole) -> i32 {
    match role {
        StyleRole::GridCell => z_order::CELL_FILL,
        StyleRole::XAxisLabel | StyleRole::YAxisLabel => z_order::AXIS_LABELS,
        StyleRole::DataLabel => z_order::DATA_LABELS,
        StyleRole::LegendSwatch => z_order::LEGEND_SWATCHES,
        StyleRole::LegendLabel => z_order::LEGEND_LABELS,
    }
}

/// The full output of one update cycle.
#[derive(Clone, Debug, Default)]
pub struct HeatmapScene {
    /// Drawing surface size, already grown past the viewport when the grid or
    /// legend would otherwise clip.
    pub surface: Size,
    /// Rectangle marks (cells, legend swatches).
    pub rects: Vec<RectMark>,
    /// Text marks (axis labels, data labels, legend labels).
    pub texts: Vec<TextMark>,
    /// Suggested transition duration in milliseconds.
    ///
    /// Purely a presentation hint; the core manages no timers.
    pub duration_hint_ms: u32,
}

impl HeatmapScene {
    /// Returns `true` when the scene draws nothing.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }
}
