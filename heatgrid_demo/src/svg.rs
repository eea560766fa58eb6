// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `heatgrid_demo`.

use heatgrid_chart::{HeatmapScene, TextAnchor, TextBaseline};
use peniko::Brush;

/// Serializes a scene as a standalone SVG document.
///
/// Marks are emitted in `(z_index, insertion order)` order, the deterministic
/// ordering the chart layer's z-order conventions assume. Tooltips are
/// rendered as `<title>` children so hovering a cell or swatch shows its
/// payload in a plain viewer.
pub(crate) fn to_svg_string(scene: &HeatmapScene) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = scene.surface.width,
        h = scene.surface.height
    ));
    out.push('\n');

    let mut order: Vec<(i32, usize, Element<'_>)> = Vec::new();
    for (i, rect) in scene.rects.iter().enumerate() {
        order.push((rect.z_index, i, Element::Rect(rect)));
    }
    for (i, text) in scene.texts.iter().enumerate() {
        order.push((text.z_index, scene.rects.len() + i, Element::Text(text)));
    }
    order.sort_by_key(|(z, i, _)| (*z, *i));

    for (_z, _i, element) in order {
        match element {
            Element::Rect(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                ));
                write_paint_attr(&mut out, "fill", &r.fill);
                if r.opacity < 1.0 {
                    out.push_str(&format!(r#" opacity="{}""#, r.opacity));
                }
                match &r.tooltip {
                    Some(tooltip) => {
                        out.push('>');
                        out.push_str("<title>");
                        for (i, (name, value)) in tooltip.iter().enumerate() {
                            if i > 0 {
                                out.push_str("&#10;");
                            }
                            out.push_str(&escape_xml(name));
                            out.push_str(": ");
                            out.push_str(&escape_xml(value));
                        }
                        out.push_str("</title></rect>\n");
                    }
                    None => out.push_str("/>\n"),
                }
            }
            Element::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Middle => "middle",
                    TextBaseline::Hanging => "hanging",
                };
                let anchor = match t.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="{}" text-anchor="{}""#,
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    t.font_family.as_css_family(),
                    baseline,
                    anchor,
                ));
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

enum Element<'a> {
    Rect(&'a heatgrid_chart::RectMark),
    Text(&'a heatgrid_chart::TextMark),
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
