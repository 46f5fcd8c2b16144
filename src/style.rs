//! Chart styling.
//!
//! [`GraphStyle`] is an immutable value passed into render calls; nothing in
//! it mutates widget state. Colors are packed `0xRRGGBB`. The whole style
//! round-trips through JSON apart from the number formatter, which is a plain
//! function value and stays outside the serde surface.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::render::svg::fmt_num;
use crate::types::Padding;

/// Horizontal placement of the side value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelsAlignment {
    #[default]
    Left,
    Right,
}

/// Formats one axis value for display.
pub type ValueFormatter = fn(f64) -> String;

/// Stock formatter: compact numeric formatting with trailing zeros trimmed.
pub fn default_formatter(value: f64) -> String {
    fmt_num(value)
}

fn stock_formatter() -> ValueFormatter {
    default_formatter
}

/// Immutable style for one render.
///
/// Defaults match the stock look: red-to-green gradients, white strokes and
/// text, three horizontal and eight vertical gridlines. Only `padding` feeds
/// into the geometry; everything else is paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    /// Background gradient, top stop.
    pub start_color: u32,
    /// Background gradient, bottom stop.
    pub end_color: u32,
    /// Area gradient, top stop.
    pub start_graph_color: u32,
    /// Area gradient, bottom stop.
    pub end_graph_color: u32,
    /// Title, dots, and bottom labels.
    pub font_color: u32,
    /// Stroke of the data polyline.
    pub graph_line_color: u32,
    /// Stroke width of the data polyline.
    pub line_width: f64,
    /// Draw a marker dot on every point.
    pub dots_enabled: bool,
    /// Draw the dashed gridlines.
    pub lines_enabled: bool,
    pub labels_alignment: LabelsAlignment,
    /// Side value labels.
    pub labels_text_color: u32,
    /// Gridline stroke.
    pub lines_color: u32,
    /// Gridline stroke width.
    pub lines_width: f64,
    /// Horizontal gridline count; also the side label count.
    pub max_horizontal_lines: usize,
    /// Vertical gridline count.
    pub max_vertical_lines: usize,
    /// Insets around the plot band.
    pub padding: Padding,
    /// Formats side-label values.
    #[serde(skip, default = "stock_formatter")]
    pub value_formatter: ValueFormatter,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            start_color: 0xFF0000,
            end_color: 0x00FF00,
            start_graph_color: 0xFF0000,
            end_graph_color: 0x00FF00,
            font_color: 0xFFFFFF,
            graph_line_color: 0xFFFFFF,
            line_width: 2.0,
            dots_enabled: true,
            lines_enabled: true,
            labels_alignment: LabelsAlignment::Left,
            labels_text_color: 0xFFFFFF,
            lines_color: 0xFFFFFF,
            lines_width: 1.0,
            max_horizontal_lines: 3,
            max_vertical_lines: 8,
            padding: Padding::default(),
            value_formatter: default_formatter,
        }
    }
}

impl GraphStyle {
    /// Check the fields the renderer divides by or strokes with.
    ///
    /// Gridline counts must be at least 2 per direction (they also size the
    /// side label column); stroke widths must be finite and non-negative.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.max_horizontal_lines < 2 {
            return Err(GraphError::InvalidStyle {
                field: "max_horizontal_lines",
                value: self.max_horizontal_lines as f64,
            });
        }
        if self.max_vertical_lines < 2 {
            return Err(GraphError::InvalidStyle {
                field: "max_vertical_lines",
                value: self.max_vertical_lines as f64,
            });
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(GraphError::InvalidStyle {
                field: "line_width",
                value: self.line_width,
            });
        }
        if !self.lines_width.is_finite() || self.lines_width < 0.0 {
            return Err(GraphError::InvalidStyle {
                field: "lines_width",
                value: self.lines_width,
            });
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON. The number formatter is skipped.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a style from JSON.
    ///
    /// Missing fields fall back to their defaults; the number formatter is
    /// always the stock one after parsing.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== default tests ====================

    #[test]
    fn default_style_matches_the_stock_look() {
        let style = GraphStyle::default();

        assert_eq!(style.start_color, 0xFF0000);
        assert_eq!(style.end_color, 0x00FF00);
        assert_eq!(style.font_color, 0xFFFFFF);
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.lines_width, 1.0);
        assert!(style.dots_enabled);
        assert!(style.lines_enabled);
        assert_eq!(style.labels_alignment, LabelsAlignment::Left);
        assert_eq!(style.max_horizontal_lines, 3);
        assert_eq!(style.max_vertical_lines, 8);
        assert_eq!(style.padding, Padding::default());
        assert_eq!((style.value_formatter)(0.5), "0.5");
    }

    // ==================== validate tests ====================

    #[test]
    fn stock_style_validates() {
        assert!(GraphStyle::default().validate().is_ok());
    }

    #[test]
    fn too_few_gridlines_are_rejected() {
        let style = GraphStyle {
            max_horizontal_lines: 1,
            ..GraphStyle::default()
        };
        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("max_horizontal_lines"));

        let style = GraphStyle {
            max_vertical_lines: 0,
            ..GraphStyle::default()
        };
        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("max_vertical_lines"));
    }

    #[test]
    fn bad_widths_are_rejected() {
        let style = GraphStyle {
            line_width: f64::NAN,
            ..GraphStyle::default()
        };
        assert!(style.validate().is_err());

        let style = GraphStyle {
            lines_width: -1.0,
            ..GraphStyle::default()
        };
        assert!(style.validate().is_err());
    }

    // ==================== serde tests ====================

    #[test]
    fn style_round_trips_through_json() {
        let style = GraphStyle {
            start_color: 0x112233,
            line_width: 3.5,
            labels_alignment: LabelsAlignment::Right,
            max_vertical_lines: 4,
            ..GraphStyle::default()
        };

        let json = style.to_json_pretty().unwrap();
        let parsed = GraphStyle::from_json_str(&json).unwrap();
        assert_eq!(parsed, style);
    }

    #[test]
    fn formatter_stays_out_of_the_json() {
        let json = GraphStyle::default().to_json_pretty().unwrap();
        assert!(!json.contains("value_formatter"));
        assert!(json.contains("\"labels_alignment\": \"left\""));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let style = GraphStyle::from_json_str(r#"{ "line_width": 4.0 }"#).unwrap();
        assert_eq!(style.line_width, 4.0);
        assert_eq!(style.max_horizontal_lines, 3);
        assert_eq!((style.value_formatter)(2.0), "2");
    }

    #[test]
    fn custom_formatter_is_just_a_function() {
        fn percent(value: f64) -> String {
            format!("{}%", value.round() as i64)
        }

        let style = GraphStyle {
            value_formatter: percent,
            ..GraphStyle::default()
        };
        assert_eq!((style.value_formatter)(42.4), "42%");
    }
}
