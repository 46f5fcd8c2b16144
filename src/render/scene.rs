//! Scene assembly: geometry + style to a flat display list.
//!
//! [`build_scene`] turns a derived [`Geometry`] into paint-order primitives
//! so the SVG writer stays mechanical. Stacking follows the widget's layer
//! order: gridlines under the area fill, the data line above it, dots on
//! top, then text.

use glam::{DVec2, dvec2};

use super::defaults;
use super::path::PathData;
use crate::geometry::{Geometry, column_x};
use crate::style::{GraphStyle, LabelsAlignment};
use crate::types::{Padding, Rect};

/// Horizontal anchoring of a text run at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Gradient-filled region under the data polyline.
///
/// `start_offset` is the normalized row (row over rect height) where the
/// gradient's top stop sits, tracking the highest point of the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaFill {
    pub path: PathData,
    pub start_color: u32,
    pub end_color: u32,
    pub start_offset: f64,
}

/// Stroked, unfilled path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub data: PathData,
    pub color: u32,
    pub width: f64,
    pub opacity: f64,
    pub dashed: bool,
}

/// Filled marker circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub center: DVec2,
    pub radius: f64,
    pub fill: u32,
}

/// One line of text, vertically centered on its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: DVec2,
    pub content: String,
    pub color: u32,
    pub size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
}

/// One draw call, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Area(AreaFill),
    Path(StrokedPath),
    Circle(Dot),
    Text(Label),
}

/// A fully assembled scene, self-contained for the SVG writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Background gradient, top stop.
    pub background_start: u32,
    /// Background gradient, bottom stop.
    pub background_end: u32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// The area fill, if the scene has one.
    pub fn area(&self) -> Option<&AreaFill> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Area(area) => Some(area),
            _ => None,
        })
    }
}

/// Assemble the display list for one frame.
///
/// An empty geometry produces a background-only scene; everything else
/// (area, line, dots, labels, title) needs at least one point. Bottom labels
/// lay out by their own count so label-only configurations still align to
/// columns.
pub fn build_scene(
    rect: Rect,
    geometry: &Geometry,
    column_names: Option<&[String]>,
    title: Option<&str>,
    style: &GraphStyle,
) -> Scene {
    let padding = style.padding;
    let mut primitives = Vec::new();

    if !geometry.is_empty() {
        if style.lines_enabled {
            primitives.push(Primitive::Path(StrokedPath {
                data: gridline_path(rect, padding, style),
                color: style.lines_color,
                width: style.lines_width,
                opacity: defaults::GRIDLINE_OPACITY,
                dashed: true,
            }));
        }

        primitives.push(Primitive::Area(AreaFill {
            path: area_path(geometry, rect, padding),
            start_color: style.start_graph_color,
            end_color: style.end_graph_color,
            start_offset: geometry.min_y / rect.height,
        }));

        primitives.push(Primitive::Path(StrokedPath {
            data: polyline_path(geometry),
            color: style.graph_line_color,
            width: style.line_width,
            opacity: 1.0,
            dashed: false,
        }));

        if style.dots_enabled {
            for c in &geometry.coordinates {
                primitives.push(Primitive::Circle(Dot {
                    center: *c,
                    radius: defaults::DOT_DIAMETER / 2.0,
                    fill: style.font_color,
                }));
            }
        }

        push_side_labels(rect, padding, geometry, style, &mut primitives);

        if let Some(names) = column_names {
            push_bottom_labels(rect, padding, names, style, &mut primitives);
        }

        if let Some(title) = title {
            primitives.push(Primitive::Text(Label {
                pos: dvec2(
                    rect.width / 2.0,
                    defaults::TITLE_MARGIN + defaults::TITLE_BAND_HEIGHT / 2.0,
                ),
                content: title.to_string(),
                color: style.font_color,
                size: defaults::TITLE_FONT_SIZE,
                bold: true,
                anchor: TextAnchor::Middle,
            }));
        }
    }

    crate::log::debug!(primitives = primitives.len(), "assembled scene");

    Scene {
        width: rect.width,
        height: rect.height,
        background_start: style.start_color,
        background_end: style.end_color,
        primitives,
    }
}

/// Open polyline through the geometry's points.
fn polyline_path(geometry: &Geometry) -> PathData {
    let mut data = PathData::new();
    for (i, c) in geometry.coordinates.iter().enumerate() {
        if i == 0 {
            data = data.m(c.x, c.y);
        } else {
            data = data.l(c.x, c.y);
        }
    }
    data
}

/// The polyline closed down to the bottom plot row under its last and first
/// columns.
fn area_path(geometry: &Geometry, rect: Rect, padding: Padding) -> PathData {
    let mut data = polyline_path(geometry);
    if let (Some(first), Some(last)) =
        (geometry.coordinates.first(), geometry.coordinates.last())
    {
        let bottom = rect.plot_bottom(padding);
        data = data.l(last.x, bottom).l(first.x, bottom).z();
    }
    data
}

/// All gridline segments as one multi-subpath path.
///
/// Horizontal lines are inset by the stroke width from the padding
/// boundaries; vertical lines are nudged inward by it at the last column and
/// outward everywhere else.
fn gridline_path(rect: Rect, padding: Padding, style: &GraphStyle) -> PathData {
    let mut data = PathData::new();
    let height = rect.plot_height(padding);
    let width = rect.plot_width(padding);
    let inset = style.lines_width;

    let h = style.max_horizontal_lines;
    for i in 0..h {
        let y = height / (h - 1) as f64 * i as f64 + padding.top;
        data = data
            .m(padding.left + inset, y)
            .l(rect.width - padding.right - inset, y);
    }

    let v = style.max_vertical_lines;
    for i in 0..v {
        let x = width / (v - 1) as f64 * i as f64 + padding.left;
        let x = if i == v - 1 { x - inset } else { x + inset };
        data = data.m(x, padding.top).l(x, padding.top + height);
    }

    data
}

/// One value label per horizontal gridline, min at the bottom row, max at
/// the top.
fn push_side_labels(
    rect: Rect,
    padding: Padding,
    geometry: &Geometry,
    style: &GraphStyle,
    out: &mut Vec<Primitive>,
) {
    let h = style.max_horizontal_lines;
    let height = rect.plot_height(padding);
    let span = geometry.max_value - geometry.min_value;

    let (x, anchor) = match style.labels_alignment {
        LabelsAlignment::Left => (0.0, TextAnchor::Start),
        LabelsAlignment::Right => (rect.width, TextAnchor::End),
    };

    for i in 0..h {
        let row = height / (h - 1) as f64 * (h - 1 - i) as f64 + padding.top;
        let value = 1.0 / (h - 1) as f64 * i as f64 * span + geometry.min_value;
        out.push(Primitive::Text(Label {
            pos: dvec2(x, row),
            content: (style.value_formatter)(value),
            color: style.labels_text_color,
            size: defaults::LABEL_FONT_SIZE,
            bold: false,
            anchor,
        }));
    }
}

/// One label per column name, centered on its column at the middle of the
/// bottom padding band.
fn push_bottom_labels(
    rect: Rect,
    padding: Padding,
    names: &[String],
    style: &GraphStyle,
    out: &mut Vec<Primitive>,
) {
    let y = rect.height - padding.bottom / 2.0;
    for (i, name) in names.iter().enumerate() {
        out.push(Primitive::Text(Label {
            pos: dvec2(column_x(i, names.len(), rect, padding), y),
            content: name.clone(),
            color: style.font_color,
            size: defaults::LABEL_FONT_SIZE,
            bold: false,
            anchor: TextAnchor::Middle,
        }));
    }
}
