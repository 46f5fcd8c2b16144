//! An animated line/area chart renderer.
//!
//! strich maps an ordered series of values into pixel-space geometry, wraps
//! it in a widget-style facade ([`Graph`]), and writes styled SVG documents:
//! a gradient-filled area under the data polyline, overlaid with gridlines,
//! axis labels, point markers and a title. Transitions between datasets are
//! plain values ([`Transition`]) the host samples with its own clock, frame
//! by frame; nothing in the crate owns timing.
//!
//! The geometry mapping in [`geometry`] is the only real logic. It has
//! defined, NaN-free behavior for every degenerate input: empty series,
//! single points and zero value ranges all map to something drawable. The
//! one hard precondition, checked by [`Graph`], is that column names match
//! the points in length when supplied.
//!
//! # Example
//!
//! ```
//! use strich::{Graph, GraphStyle, Rect};
//!
//! let mut graph = Graph::new(Rect::new(300.0, 200.0));
//! let style = GraphStyle::default();
//!
//! graph.configure(vec![0.0, 5.0, 10.0], None, Some("demo".into()), &style)?;
//! let svg = strich::render(&graph, &style)?;
//! assert!(svg.starts_with("<svg"));
//!
//! // animate to a new dataset; the host drives the clock
//! let transition = graph.animate(vec![10.0, 2.0, 7.0], None, &style)?;
//! let halfway = strich::render_frame(&graph, &style, &transition, 0.2)?;
//! assert_ne!(halfway, svg);
//! # Ok::<(), strich::GraphError>(())
//! ```

pub mod anim;
pub mod errors;
pub mod geometry;
pub mod graph;
pub(crate) mod log;
pub mod render;
pub mod style;
pub mod types;

pub use anim::{DEFAULT_DURATION, Easing, Transition};
pub use errors::GraphError;
pub use geometry::Geometry;
pub use graph::Graph;
pub use render::{render, render_frame};
pub use style::{GraphStyle, LabelsAlignment, ValueFormatter, default_formatter};
pub use types::{NumericError, Padding, Rect};
