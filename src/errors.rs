//! Error types with rich diagnostics using miette
//!
//! The only hard contract across the whole widget is the points/labels length
//! check; everything else that can go wrong is bad numeric input caught at
//! the crate boundary.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors surfaced by the graph facade and renderer
#[derive(Error, Diagnostic, Debug)]
pub enum GraphError {
    /// The one hard precondition: column names, when supplied, must match
    /// the points in length.
    #[error("points/labels length mismatch: {points} points but {labels} column names")]
    #[diagnostic(
        code(strich::graph::label_count_mismatch),
        help("pass one column name per point, or no column names at all")
    )]
    LabelCountMismatch { points: usize, labels: usize },

    #[error("point {index} is not a usable number")]
    #[diagnostic(code(strich::graph::bad_point))]
    BadPoint {
        index: usize,
        #[source]
        source: NumericError,
    },

    #[error("invalid style: {field} = {value}")]
    #[diagnostic(
        code(strich::render::invalid_style),
        help("gridline counts need at least 2 lines per direction; widths must be finite and non-negative")
    )]
    InvalidStyle { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_count_mismatch_message_names_both_counts() {
        let err = GraphError::LabelCountMismatch {
            points: 2,
            labels: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 points"));
        assert!(msg.contains("1 column names"));
    }

    #[test]
    fn bad_point_carries_the_numeric_cause() {
        let err = GraphError::BadPoint {
            index: 3,
            source: NumericError::NaN,
        };
        assert!(err.to_string().contains("point 3"));
        let source = std::error::Error::source(&err).expect("should have a source");
        assert_eq!(source.to_string(), "value is NaN");
    }
}
