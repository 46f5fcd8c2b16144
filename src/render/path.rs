//! SVG path data construction.

use std::fmt;

use super::svg::fmt_num;

/// Builder for an SVG path `d` attribute.
///
/// Consuming builder: `PathData::new().m(x, y).l(x, y).z()`. Coordinates are
/// formatted compactly with trailing zeros trimmed, so equal inputs always
/// produce byte-equal strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathData(String);

impl PathData {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Move to an absolute position, starting a new subpath.
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.push_cmd('M', x, y);
        self
    }

    /// Line to an absolute position.
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.push_cmd('L', x, y);
        self
    }

    /// Close the current subpath.
    pub fn z(mut self) -> Self {
        if !self.0.is_empty() {
            self.0.push_str(" Z");
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn push_cmd(&mut self, cmd: char, x: f64, y: f64) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push(cmd);
        self.0.push(' ');
        self.0.push_str(&fmt_num(x));
        self.0.push(' ');
        self.0.push_str(&fmt_num(y));
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
