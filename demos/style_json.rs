fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Pass a JSON file as the first argument, or fall back to an inline style.
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).expect("Failed to read style file"),
        None => r#"{
            "labels_alignment": "right",
            "start_graph_color": 2271999,
            "end_graph_color": 16777215,
            "max_vertical_lines": 5
        }"#
        .to_string(),
    };

    let style = match strich::GraphStyle::from_json_str(&json) {
        Ok(style) => style,
        Err(e) => {
            eprintln!("Error parsing style: {}", e);
            return;
        }
    };

    match style.to_json_pretty() {
        Ok(pretty) => eprintln!("effective style:\n{}", pretty),
        Err(e) => eprintln!("Error: {}", e),
    }

    let mut graph = strich::Graph::new(strich::Rect::new(480.0, 320.0));
    if let Err(e) = graph.configure(
        vec![3.0, 9.0, 4.0, 11.0, 7.0],
        Some(vec![
            "q1".into(),
            "q2".into(),
            "q3".into(),
            "q4".into(),
            "q5".into(),
        ]),
        Some("Styled from JSON".into()),
        &style,
    ) {
        eprintln!("Error: {}", e);
        return;
    }

    match strich::render(&graph, &style) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
