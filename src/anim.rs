//! Animated transitions between geometries.
//!
//! A [`Transition`] is a declarative description of one blend: start
//! geometry, target geometry, duration, easing curve. The host owns timing;
//! it samples the transition with its own clock each frame and renders the
//! result. Nothing in this module keeps time.

use crate::geometry::{Geometry, interpolate_geometry, lerp};
use crate::types::Rect;

/// Duration of the stock transitions, in seconds.
pub const DEFAULT_DURATION: f64 = 0.4;

/// Easing curves for transitions.
///
/// `EaseInOut` follows cubic-bezier(0.42, 0, 0.58, 1), the stock
/// ease-in-ease-out timing curve, and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] (clamped) to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => bezier_ease_in_out(t),
        }
    }
}

/// y-progress of cubic-bezier(0.42, 0, 0.58, 1) at x-progress `t`.
///
/// The curve parameter is recovered from `t` by Newton iteration on
/// x(s) = 1.26s - 0.78s^2 + 0.52s^3, whose derivative stays above 0.87
/// on [0, 1].
fn bezier_ease_in_out(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut s = t;
    for _ in 0..8 {
        let x = s * (1.26 + s * (-0.78 + s * 0.52));
        let dx = 1.26 + s * (-1.56 + s * 1.56);
        s -= (x - t) / dx;
    }
    let s = s.clamp(0.0, 1.0);
    s * s * (3.0 - 2.0 * s)
}

/// Declarative description of one animated transition.
///
/// `gradient_from` and `gradient_to` are the normalized rows (row over rect
/// height) the area gradient's top stop moves between, tracking the highest
/// visible point of each endpoint geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Geometry,
    pub to: Geometry,
    /// Seconds from start to completion.
    pub duration: f64,
    pub easing: Easing,
    pub gradient_from: f64,
    pub gradient_to: f64,
}

impl Transition {
    /// Transition between two geometries with the stock duration and easing.
    pub fn new(from: Geometry, to: Geometry, rect: Rect) -> Self {
        let gradient_from = from.min_y / rect.height;
        let gradient_to = to.min_y / rect.height;
        Self {
            from,
            to,
            duration: DEFAULT_DURATION,
            easing: Easing::EaseInOut,
            gradient_from,
            gradient_to,
        }
    }

    /// Same transition with a different duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Same transition with a different easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress at `elapsed` seconds after the start.
    ///
    /// A non-positive duration snaps straight to the end state.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed / self.duration).clamp(0.0, 1.0))
    }

    /// Geometry at `elapsed` seconds after the start.
    pub fn sample(&self, elapsed: f64) -> Geometry {
        interpolate_geometry(&self.from, &self.to, self.progress(elapsed))
    }

    /// Normalized row of the area gradient's top stop at `elapsed` seconds.
    pub fn gradient_offset(&self, elapsed: f64) -> f64 {
        lerp(self.gradient_from, self.gradient_to, self.progress(elapsed))
    }

    /// True once `elapsed` has reached the duration.
    pub fn is_done(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}
