//! The chart widget facade.
//!
//! [`Graph`] owns the current dataset and its derived [`Geometry`], and is
//! the place where the points/labels length contract is enforced. It is a
//! plain single-owner value: all calls are synchronous, nothing is shared
//! across threads, and style comes in as an immutable argument per call.

use crate::anim::Transition;
use crate::errors::GraphError;
use crate::geometry::{Geometry, collapse_to_min, compute_geometry};
use crate::style::GraphStyle;
use crate::types::{Rect, ensure_finite};

/// An animated line/area chart over one numeric series.
///
/// Geometry is pure derived state: it is recomputed from the stored points
/// and rectangle on every configuration or animation call, never mutated
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    rect: Rect,
    points: Vec<f64>,
    column_names: Option<Vec<String>>,
    title: Option<String>,
    geometry: Geometry,
}

impl Graph {
    /// Empty chart over a drawing rectangle.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            points: Vec::new(),
            column_names: None,
            title: None,
            geometry: Geometry::default(),
        }
    }

    /// (Re)initialize with a new dataset.
    ///
    /// `column_names` and `title` passed as `None` keep their previous
    /// values; provided column names replace the old ones and must match the
    /// new points in length. Points must be finite. On error nothing changes.
    pub fn configure(
        &mut self,
        points: Vec<f64>,
        column_names: Option<Vec<String>>,
        title: Option<String>,
        style: &GraphStyle,
    ) -> Result<(), GraphError> {
        validate_series(&points, column_names.as_deref())?;

        crate::log::debug!(points = points.len(), "configure");

        if let Some(names) = column_names {
            self.column_names = Some(names);
        }
        if let Some(title) = title {
            self.title = Some(title);
        }
        self.points = points;
        self.geometry = compute_geometry(&self.points, self.rect, style.padding);
        Ok(())
    }

    /// Transition from the current dataset to a new one.
    ///
    /// Validates like [`configure`](Self::configure), replaces the stored
    /// dataset, and returns a stock 0.4 s ease-in-ease-out [`Transition`]
    /// between the old and new geometries for the host to sample.
    pub fn animate(
        &mut self,
        points: Vec<f64>,
        column_names: Option<Vec<String>>,
        style: &GraphStyle,
    ) -> Result<Transition, GraphError> {
        validate_series(&points, column_names.as_deref())?;

        crate::log::debug!(
            from = self.points.len(),
            to = points.len(),
            "animate"
        );

        if let Some(names) = column_names {
            self.column_names = Some(names);
        }
        let from = std::mem::take(&mut self.geometry);
        self.points = points;
        self.geometry = compute_geometry(&self.points, self.rect, style.padding);
        Ok(Transition::new(from, self.geometry.clone(), self.rect))
    }

    /// Collapse every point onto the series-minimum row, animated.
    ///
    /// The stored points are untouched; only the displayed geometry drops to
    /// the bottom of the plot band. The next [`configure`](Self::configure)
    /// or [`animate`](Self::animate) call restores value-derived rows.
    pub fn animate_to_min_values(&mut self) -> Transition {
        let from = std::mem::take(&mut self.geometry);
        self.geometry = collapse_to_min(&from);
        Transition::new(from, self.geometry.clone(), self.rect)
    }

    /// Change the drawing rectangle and re-derive geometry from the stored
    /// points.
    pub fn set_rect(&mut self, rect: Rect, style: &GraphStyle) {
        self.rect = rect;
        self.geometry = compute_geometry(&self.points, rect, style.padding);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn column_names(&self) -> Option<&[String]> {
        self.column_names.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The current derived geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

/// The one validated precondition of the whole widget, plus the finiteness
/// screen on incoming values.
fn validate_series(points: &[f64], column_names: Option<&[String]>) -> Result<(), GraphError> {
    if let Some(names) = column_names {
        if names.len() != points.len() {
            return Err(GraphError::LabelCountMismatch {
                points: points.len(),
                labels: names.len(),
            });
        }
    }
    for (index, value) in points.iter().enumerate() {
        ensure_finite(*value).map_err(|source| GraphError::BadPoint { index, source })?;
    }
    Ok(())
}
