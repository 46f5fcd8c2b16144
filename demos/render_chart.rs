fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let style = strich::GraphStyle {
        start_color: 0x1E1E2E,
        end_color: 0x31314A,
        start_graph_color: 0xF38BA8,
        end_graph_color: 0xA6E3A1,
        ..strich::GraphStyle::default()
    };

    let mut graph = strich::Graph::new(strich::Rect::new(640.0, 360.0));
    let configured = graph.configure(
        vec![12.0, 9.5, 14.0, 11.0, 17.5, 16.0, 21.0],
        Some(
            ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        Some("Requests per day".into()),
        &style,
    );
    if let Err(e) = configured {
        eprintln!("Error: {}", e);
        return;
    }

    match strich::render(&graph, &style) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
