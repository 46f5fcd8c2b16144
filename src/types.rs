//! Strongly-typed drawing-surface primitives.
//!
//! Geometry math works in device-independent pixel units (plain `f64` /
//! `glam::DVec2`); these types guard the crate boundary so NaN and infinity
//! never reach the mapping code. Use `try_new` for caller-provided values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate that a value is a finite number.
#[inline]
pub(crate) fn ensure_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// The drawing rectangle a chart is laid out in (device-independent units).
///
/// Width and height are the full widget bounds; the plot band inside them is
/// derived together with a [`Padding`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a Rect from raw dimensions (unchecked).
    /// Use `try_new` for caller-provided values.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Rect {
        Rect { width, height }
    }

    /// Create a Rect with validation (rejects NaN/infinite/zero/negative
    /// dimensions).
    pub fn try_new(width: f64, height: f64) -> Result<Rect, NumericError> {
        for dim in [width, height] {
            ensure_finite(dim)?;
            if dim == 0.0 {
                return Err(NumericError::Zero);
            }
            if dim < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(Rect { width, height })
    }

    /// Horizontal span available to columns: full width minus both side
    /// paddings.
    #[inline]
    pub fn plot_width(&self, padding: Padding) -> f64 {
        self.width - padding.left - padding.right
    }

    /// Vertical span the value-to-row mapping scales into: full height minus
    /// the bottom padding. Rows run from `padding.top` (maximum value) down
    /// to `padding.top + plot_height` (minimum value).
    #[inline]
    pub fn plot_height(&self, padding: Padding) -> f64 {
        self.height - padding.bottom
    }

    /// Bottom row of the plot band.
    #[inline]
    pub fn plot_bottom(&self, padding: Padding) -> f64 {
        padding.top + self.plot_height(padding)
    }
}

/// Inset margins reserving space for labels and the title around the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Padding {
    /// Create a Padding from raw insets (unchecked).
    /// Use `try_new` for caller-provided values.
    #[inline]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Padding {
        Padding {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create a Padding with validation (rejects NaN/infinite/negative
    /// insets).
    pub fn try_new(top: f64, left: f64, bottom: f64, right: f64) -> Result<Padding, NumericError> {
        for inset in [top, left, bottom, right] {
            ensure_finite(inset)?;
            if inset < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(Padding {
            top,
            left,
            bottom,
            right,
        })
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            top: 10.0,
            left: 20.0,
            bottom: 20.0,
            right: 20.0,
        }
    }
}
