//! Fixed scene constants (all in device-independent units)

pub const DOT_DIAMETER: f64 = 5.0;
pub const TITLE_MARGIN: f64 = 8.0;
pub const TITLE_BAND_HEIGHT: f64 = 25.0;
pub const TITLE_FONT_SIZE: f64 = 16.0;
pub const LABEL_FONT_SIZE: f64 = 11.0;
pub const GRIDLINE_OPACITY: f64 = 0.3;
pub const GRIDLINE_DASH: &str = "2,4";
