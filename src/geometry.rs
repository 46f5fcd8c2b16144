//! Point-to-pixel geometry mapping.
//!
//! The one place with real logic: turns an ordered series of values plus a
//! drawing rectangle into pixel coordinates, locates the extrema rows, and
//! blends two geometries for animated transitions. Everything here is
//! deterministic and side-effect-free; the renderer and the transition engine
//! are mechanical consumers of these outputs.

use glam::{DVec2, dvec2};

use crate::types::{Padding, Rect};

/// Derived pixel-space representation of a series within a drawing rectangle.
///
/// `coordinates` is the polyline through the data points in series order.
/// `min_y` is the row of the largest value (top of the plot band) and `max_y`
/// the row of the smallest (bottom); the names follow the value axis, which
/// runs opposite to screen rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    pub coordinates: Vec<DVec2>,
    pub min_value: f64,
    pub max_value: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Geometry {
    /// True when no series has been mapped. Dependent draws (area fill,
    /// dots, labels) must be skipped for an empty geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Number of mapped points.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

/// x-position of column `index` out of `point_count` evenly spaced columns.
///
/// The first column sits on the left padding boundary and the last on the
/// right one. A single column collapses to the left boundary. Independent of
/// the value mapping so bottom labels can align to columns on their own.
pub fn column_x(index: usize, point_count: usize, rect: Rect, padding: Padding) -> f64 {
    if point_count <= 1 {
        return padding.left;
    }
    let spacing = rect.plot_width(padding) / (point_count - 1) as f64;
    padding.left + spacing * index as f64
}

/// Row for `value` given the series extrema.
///
/// The largest value maps to `padding.top` and the smallest to the plot
/// bottom. A zero value range parks every row on the vertical center of the
/// band instead of dividing by zero.
pub fn value_y(value: f64, min_value: f64, max_value: f64, rect: Rect, padding: Padding) -> f64 {
    let span = max_value - min_value;
    let height = rect.plot_height(padding);
    if span == 0.0 {
        return padding.top + height / 2.0;
    }
    padding.top + height * (1.0 - (value - min_value) / span)
}

/// Map a series into pixel space.
///
/// Empty input yields an empty geometry rather than an error. Values are
/// expected to be finite; the graph facade validates caller input before it
/// gets here.
pub fn compute_geometry(points: &[f64], rect: Rect, padding: Padding) -> Geometry {
    if points.is_empty() {
        return Geometry::default();
    }

    let (min_value, max_value) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    let count = points.len();
    let coordinates = points
        .iter()
        .enumerate()
        .map(|(i, v)| {
            dvec2(
                column_x(i, count, rect, padding),
                value_y(*v, min_value, max_value, rect, padding),
            )
        })
        .collect();

    let min_y = value_y(max_value, min_value, max_value, rect, padding);
    let max_y = value_y(min_value, min_value, max_value, rect, padding);

    crate::log::debug!(
        points = count,
        min_value,
        max_value,
        min_y,
        max_y,
        "computed geometry"
    );

    Geometry {
        coordinates,
        min_value,
        max_value,
        min_y,
        max_y,
    }
}

/// Linear blend between two scalars.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Resample a polyline to `count` points by fractional index.
///
/// Positions are spread evenly in index space (normalized position along the
/// input point sequence), so the first and last points are always kept.
fn resample(points: &[DVec2], count: usize) -> Vec<DVec2> {
    if count == 0 || points.is_empty() {
        return Vec::new();
    }
    if points.len() == count {
        return points.to_vec();
    }
    if count == 1 {
        return vec![points[0]];
    }

    let last = (points.len() - 1) as f64;
    (0..count)
        .map(|j| {
            let pos = j as f64 / (count - 1) as f64 * last;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            points[lo].lerp(points[hi], pos - lo as f64)
        })
        .collect()
}

/// Blend two geometries at `t` in [0, 1] (clamped).
///
/// Matching point counts interpolate index by index, so `t = 0` returns
/// `from` and `t = 1` returns `to` (within floating tolerance). Mismatched
/// counts resample `from` at `to`'s count first; the end of the blend is
/// still exactly `to`. If either side is empty there is nothing to morph
/// through, so the blend degenerates to a step that flips at completion.
pub fn interpolate_geometry(from: &Geometry, to: &Geometry, t: f64) -> Geometry {
    let t = t.clamp(0.0, 1.0);

    if from.is_empty() || to.is_empty() {
        return if t >= 1.0 { to.clone() } else { from.clone() };
    }

    let coordinates = if from.coordinates.len() == to.coordinates.len() {
        from.coordinates
            .iter()
            .zip(&to.coordinates)
            .map(|(a, b)| a.lerp(*b, t))
            .collect()
    } else {
        crate::log::warn!(
            from_len = from.coordinates.len(),
            to_len = to.coordinates.len(),
            "point counts differ; resampling start path"
        );
        resample(&from.coordinates, to.coordinates.len())
            .iter()
            .zip(&to.coordinates)
            .map(|(a, b)| a.lerp(*b, t))
            .collect()
    };

    Geometry {
        coordinates,
        min_value: lerp(from.min_value, to.min_value, t),
        max_value: lerp(from.max_value, to.max_value, t),
        min_y: lerp(from.min_y, to.min_y, t),
        max_y: lerp(from.max_y, to.max_y, t),
    }
}

/// Geometry with every row collapsed onto the minimum-value row.
///
/// Column positions and the value extrema stay put; `min_y` joins `max_y` so
/// gradient geometry tracking the highest visible point collapses too. This
/// is the target of the "reset" transition.
pub fn collapse_to_min(geometry: &Geometry) -> Geometry {
    Geometry {
        coordinates: geometry
            .coordinates
            .iter()
            .map(|c| dvec2(c.x, geometry.max_y))
            .collect(),
        min_value: geometry.min_value,
        max_value: geometry.max_value,
        min_y: geometry.max_y,
        max_y: geometry.max_y,
    }
}
