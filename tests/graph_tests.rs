//! End-to-end tests through the public API.

use strich::geometry::{column_x, compute_geometry, interpolate_geometry};
use strich::{
    Graph, GraphError, GraphStyle, LabelsAlignment, Padding, Rect, render, render_frame,
};

const EPSILON: f64 = 1e-10;

fn rect() -> Rect {
    Rect::new(300.0, 200.0)
}

fn padding() -> Padding {
    Padding::new(10.0, 20.0, 20.0, 20.0)
}

fn names(list: &[&str]) -> Option<Vec<String>> {
    Some(list.iter().map(|s| s.to_string()).collect())
}

// ==================== geometry property tests ====================

#[test]
fn columns_span_the_usable_width_for_any_count() {
    for n in 2..12 {
        let xs: Vec<f64> = (0..n).map(|i| column_x(i, n, rect(), padding())).collect();

        assert!((xs[0] - 20.0).abs() < EPSILON);
        assert!((xs[n - 1] - 280.0).abs() < EPSILON);

        let spacing = xs[1] - xs[0];
        for pair in xs.windows(2) {
            assert!(pair[1] > pair[0], "columns must increase (n={})", n);
            assert!(
                (pair[1] - pair[0] - spacing).abs() < EPSILON,
                "columns must be evenly spaced (n={})",
                n
            );
        }
    }
}

#[test]
fn extrema_map_to_the_plot_boundaries() {
    let g = compute_geometry(&[3.0, -1.0, 12.5, 7.0], rect(), padding());

    // max value row at padding.top, min value row at the plot bottom
    assert!((g.min_y - 10.0).abs() < EPSILON);
    assert!((g.max_y - 190.0).abs() < EPSILON);
    assert!((g.coordinates[2].y - 10.0).abs() < EPSILON);
    assert!((g.coordinates[1].y - 190.0).abs() < EPSILON);
}

#[test]
fn worked_example_end_to_end() {
    let g = compute_geometry(&[0.0, 5.0, 10.0], rect(), padding());

    assert_eq!(
        (0..3)
            .map(|i| column_x(i, 3, rect(), padding()))
            .collect::<Vec<_>>(),
        vec![20.0, 150.0, 280.0]
    );
    assert_eq!(g.coordinates[0].y, 190.0);
    assert_eq!(g.coordinates[1].y, 100.0);
    assert_eq!(g.coordinates[2].y, 10.0);
}

#[test]
fn equal_values_produce_finite_geometry() {
    let g = compute_geometry(&[4.0, 4.0, 4.0, 4.0], rect(), padding());
    for c in &g.coordinates {
        assert!(c.x.is_finite());
        assert!(c.y.is_finite());
    }
    assert_eq!(g.min_y, g.max_y);
}

#[test]
fn interpolation_is_identity_and_endpoint_exact() {
    let a = compute_geometry(&[0.0, 5.0, 10.0], rect(), padding());
    let b = compute_geometry(&[9.0, 1.0, 4.0], rect(), padding());

    for t in [0.0, 0.3, 0.7, 1.0] {
        assert_eq!(interpolate_geometry(&a, &a, t), a);
    }
    assert_eq!(interpolate_geometry(&a, &b, 0.0), a);

    let end = interpolate_geometry(&a, &b, 1.0);
    for (actual, expected) in end.coordinates.iter().zip(&b.coordinates) {
        assert!((actual.x - expected.x).abs() < EPSILON);
        assert!((actual.y - expected.y).abs() < EPSILON);
    }
}

// ==================== contract tests ====================

#[test]
fn two_points_one_label_is_rejected() {
    let mut graph = Graph::new(rect());
    let err = graph
        .configure(vec![1.0, 2.0], names(&["a"]), None, &GraphStyle::default())
        .unwrap_err();

    assert!(matches!(
        err,
        GraphError::LabelCountMismatch {
            points: 2,
            labels: 1
        }
    ));
}

#[test]
fn degenerate_series_render_without_error() {
    let style = GraphStyle::default();

    let mut empty = Graph::new(rect());
    empty.configure(vec![], None, None, &style).unwrap();
    let svg = render(&empty, &style).unwrap();
    assert!(svg.contains("</svg>"));

    let mut single = Graph::new(rect());
    single.configure(vec![42.0], None, None, &style).unwrap();
    let svg = render(&single, &style).unwrap();
    assert!(svg.contains("<circle cx=\"20\" cy=\"100\""));

    let mut flat = Graph::new(rect());
    flat.configure(vec![3.0, 3.0], None, None, &style).unwrap();
    let svg = render(&flat, &style).unwrap();
    assert!(!svg.contains("NaN"));
}

// ==================== rendering tests ====================

#[test]
fn styled_chart_document() {
    let style = GraphStyle {
        // vertical gridlines land on the three columns
        max_vertical_lines: 3,
        ..GraphStyle::default()
    };
    let mut graph = Graph::new(rect());
    graph
        .configure(
            vec![0.0, 5.0, 10.0],
            names(&["a", "b", "c"]),
            Some("demo".into()),
            &style,
        )
        .unwrap();

    let svg = render(&graph, &style).unwrap();
    insta::assert_snapshot!(svg.trim_end(), @r#"
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 200" width="300" height="200">
<defs>
<linearGradient id="background-gradient" x1="0.5" y1="0" x2="0.5" y2="1">
<stop offset="0" stop-color="rgb(255,0,0)"/>
<stop offset="1" stop-color="rgb(0,255,0)"/>
</linearGradient>
<linearGradient id="graph-gradient" x1="0.5" y1="0.05" x2="0.5" y2="1">
<stop offset="0" stop-color="rgb(255,0,0)"/>
<stop offset="1" stop-color="rgb(0,255,0)"/>
</linearGradient>
<clipPath id="area-clip">
<path d="M 20 190 L 150 100 L 280 10 L 280 190 L 20 190 Z"/>
</clipPath>
</defs>
<rect x="0" y="0" width="300" height="200" fill="url(#background-gradient)"/>
<path d="M 21 10 L 279 10 M 21 100 L 279 100 M 21 190 L 279 190 M 21 10 L 21 190 M 151 10 L 151 190 M 279 10 L 279 190" fill="none" stroke="rgb(255,255,255)" stroke-width="1" stroke-opacity="0.3" stroke-dasharray="2,4" stroke-linecap="butt"/>
<rect x="0" y="0" width="300" height="200" fill="url(#graph-gradient)" clip-path="url(#area-clip)"/>
<path d="M 20 190 L 150 100 L 280 10" fill="none" stroke="rgb(255,255,255)" stroke-width="2"/>
<circle cx="20" cy="190" r="2.5" fill="rgb(255,255,255)"/>
<circle cx="150" cy="100" r="2.5" fill="rgb(255,255,255)"/>
<circle cx="280" cy="10" r="2.5" fill="rgb(255,255,255)"/>
<text x="0" y="190" font-size="11" fill="rgb(255,255,255)" text-anchor="start" dominant-baseline="middle">0</text>
<text x="0" y="100" font-size="11" fill="rgb(255,255,255)" text-anchor="start" dominant-baseline="middle">5</text>
<text x="0" y="10" font-size="11" fill="rgb(255,255,255)" text-anchor="start" dominant-baseline="middle">10</text>
<text x="20" y="190" font-size="11" fill="rgb(255,255,255)" text-anchor="middle" dominant-baseline="middle">a</text>
<text x="150" y="190" font-size="11" fill="rgb(255,255,255)" text-anchor="middle" dominant-baseline="middle">b</text>
<text x="280" y="190" font-size="11" fill="rgb(255,255,255)" text-anchor="middle" dominant-baseline="middle">c</text>
<text x="150" y="20.5" font-size="16" fill="rgb(255,255,255)" text-anchor="middle" dominant-baseline="middle" font-weight="bold">demo</text>
</svg>
"#);
}

#[test]
fn json_styles_change_the_output() {
    let style = GraphStyle::from_json_str(
        r#"{
            "labels_alignment": "right",
            "graph_line_color": 2271999,
            "dots_enabled": false
        }"#,
    )
    .unwrap();
    assert_eq!(style.labels_alignment, LabelsAlignment::Right);

    let mut graph = Graph::new(rect());
    graph
        .configure(vec![1.0, 4.0, 2.0], None, None, &style)
        .unwrap();
    let svg = render(&graph, &style).unwrap();

    // 2271999 == 0x22AAFF
    assert!(svg.contains("stroke=\"rgb(34,170,255)\""));
    assert!(svg.contains("text-anchor=\"end\""));
    assert!(svg.contains("x=\"300\""));
    assert!(!svg.contains("<circle"));
}

// ==================== transition tests ====================

#[test]
fn transition_frames_bridge_two_renders() {
    let style = GraphStyle::default();
    let mut graph = Graph::new(rect());
    graph
        .configure(vec![0.0, 5.0, 10.0], None, None, &style)
        .unwrap();
    let before = render(&graph, &style).unwrap();

    let transition = graph.animate(vec![10.0, 5.0, 0.0], None, &style).unwrap();
    let after = render(&graph, &style).unwrap();

    assert_eq!(render_frame(&graph, &style, &transition, 0.0).unwrap(), before);
    assert_eq!(
        render_frame(&graph, &style, &transition, transition.duration).unwrap(),
        after
    );

    let mid = render_frame(&graph, &style, &transition, 0.2).unwrap();
    assert_ne!(mid, before);
    assert_ne!(mid, after);
    assert!(mid.contains("</svg>"));
}

#[test]
fn min_values_collapse_flattens_the_rendered_line() {
    let style = GraphStyle::default();
    let mut graph = Graph::new(rect());
    graph
        .configure(vec![0.0, 5.0, 10.0], None, None, &style)
        .unwrap();

    let transition = graph.animate_to_min_values();
    assert!(transition.is_done(0.4));

    let svg = render(&graph, &style).unwrap();
    // every dot parks on the bottom row and the gradient start follows
    assert_eq!(svg.matches("cy=\"190\"").count(), 3);
    assert!(svg.contains("<path d=\"M 20 190 L 150 190 L 280 190\""));
    assert!(svg.contains("id=\"graph-gradient\" x1=\"0.5\" y1=\"0.95\""));
}
