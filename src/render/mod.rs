//! SVG rendering for charts
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed scene constants (dot size, fonts, dash pattern)
//! - `path`: SVG path data construction
//! - `scene`: Display-list assembly from geometry + style
//! - `svg`: SVG generation

pub mod defaults;
pub mod path;
pub mod scene;
pub mod svg;

// Re-export commonly used items
pub use path::PathData;
pub use scene::{AreaFill, Dot, Label, Primitive, Scene, StrokedPath, TextAnchor, build_scene};
pub use svg::{color_to_rgb, fmt_num, generate_svg};

use crate::anim::Transition;
use crate::errors::GraphError;
use crate::graph::Graph;
use crate::style::GraphStyle;

/// Render the graph's current state as an SVG document.
pub fn render(graph: &Graph, style: &GraphStyle) -> Result<String, GraphError> {
    style.validate()?;
    let scene = build_scene(
        graph.rect(),
        graph.geometry(),
        graph.column_names(),
        graph.title(),
        style,
    );
    Ok(generate_svg(&scene))
}

/// Render one frame of a transition, `elapsed` seconds in.
///
/// Paths, dots, the gradient start and the side-label values all follow the
/// interpolated geometry; column names and the title come from the graph's
/// (already updated) state.
pub fn render_frame(
    graph: &Graph,
    style: &GraphStyle,
    transition: &Transition,
    elapsed: f64,
) -> Result<String, GraphError> {
    style.validate()?;
    let geometry = transition.sample(elapsed);
    let scene = build_scene(
        graph.rect(),
        &geometry,
        graph.column_names(),
        graph.title(),
        style,
    );
    Ok(generate_svg(&scene))
}
