fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let style = strich::GraphStyle::default();
    let mut graph = strich::Graph::new(strich::Rect::new(300.0, 200.0));

    if let Err(e) = graph.configure(vec![0.0, 5.0, 10.0], None, Some("tween".into()), &style) {
        eprintln!("Error: {}", e);
        return;
    }

    let transition = match graph.animate(vec![10.0, 2.0, 7.0], None, &style) {
        Ok(transition) => transition,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let frames = 10;
    for i in 0..=frames {
        let elapsed = transition.duration * i as f64 / frames as f64;
        match strich::render_frame(&graph, &style, &transition, elapsed) {
            Ok(svg) => {
                let path = format!("frame_{:02}.svg", i);
                std::fs::write(&path, svg).expect("Failed to write frame");
                eprintln!("wrote {} (elapsed {:.2}s)", path, elapsed);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        }
    }
}
