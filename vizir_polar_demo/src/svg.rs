// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vizir_polar_demo`.

use kurbo::{Point, Rect, Shape};
use peniko::{Brush, Color};
use vizir_polar::PolarPath;

#[derive(Debug)]
enum Item {
    Path {
        d: String,
        bounds: Option<Rect>,
        fill: Brush,
        stroke: Brush,
        stroke_width: f64,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        fill: Brush,
    },
}

/// Items in paint order.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    items: Vec<Item>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Adds a polar outline. Placeholder outlines are written too, one per datum.
    pub(crate) fn push_path(
        &mut self,
        path: &PolarPath,
        fill: impl Into<Brush>,
        stroke: impl Into<Brush>,
        stroke_width: f64,
    ) {
        let bounds = if path.is_empty_sentinel() {
            None
        } else {
            Some(path.to_bez_path(0.1).bounding_box())
        };
        self.items.push(Item::Path {
            d: path.to_string(),
            bounds,
            fill: fill.into(),
            stroke: stroke.into(),
            stroke_width,
        });
    }

    /// Adds a straight segment.
    pub(crate) fn push_line(&mut self, from: Point, to: Point, stroke: impl Into<Brush>) {
        self.items.push(Item::Path {
            d: format!("M{},{}L{},{}", from.x, from.y, to.x, to.y),
            bounds: Some(Rect::from_points(from, to)),
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: stroke.into(),
            stroke_width: 1.0,
        });
    }

    /// Adds a centred label.
    pub(crate) fn push_text(
        &mut self,
        pos: Point,
        text: impl Into<String>,
        font_size: f64,
        fill: impl Into<Brush>,
    ) {
        self.items.push(Item::Text {
            pos,
            text: text.into(),
            font_size,
            fill: fill.into(),
        });
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for item in &self.items {
            match item {
                Item::Path {
                    d,
                    fill,
                    stroke,
                    stroke_width,
                    ..
                } => {
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", fill);
                    if *stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", stroke);
                        out.push_str(&format!(r#" stroke-width="{stroke_width}""#));
                    }
                    out.push_str("/>\n");
                }
                Item::Text {
                    pos,
                    text,
                    font_size,
                    fill,
                } => {
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="middle""#,
                        pos.x, pos.y, font_size
                    ));
                    write_paint_attr(&mut out, "fill", fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for item in &self.items {
            let b = match item {
                Item::Path { bounds, .. } => *bounds,
                Item::Text {
                    pos,
                    text,
                    font_size,
                    ..
                } => Some(estimate_text_bounds(*pos, *font_size, text)),
            };
            let Some(b) = b else {
                continue;
            };
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }

        rect.map(|r| {
            // Add a small padding margin.
            r.inflate(10.0, 10.0)
        })
    }
}

fn estimate_text_bounds(pos: Point, font_size: f64, text: &str) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width.
    let width = 0.6 * font_size * text.chars().count() as f64;
    Rect::from_center_size(pos, (width, font_size))
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
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
