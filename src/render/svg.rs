//! SVG generation

use super::scene::{Primitive, Scene, TextAnchor};

/// Convert a packed `0xRRGGBB` color to rgb() format.
pub fn color_to_rgb(color: u32) -> String {
    let r = ((color >> 16) & 0xFF) as u8;
    let g = ((color >> 8) & 0xFF) as u8;
    let b = (color & 0xFF) as u8;
    format!("rgb({},{},{})", r, g, b)
}

/// Escape text content for SVG output.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write a scene as a complete SVG document.
///
/// Output is deterministic: equal scenes produce byte-equal documents. The
/// `<defs>` block holds the background gradient and, when the scene has an
/// area fill, the area gradient plus the clip path that confines it; the
/// gradient itself spans the full rectangle like the layer it replaces.
pub fn generate_svg(scene: &Scene) -> String {
    let width = fmt_num(scene.width);
    let height = fmt_num(scene.height);

    crate::log::debug!(
        width = scene.width,
        height = scene.height,
        primitives = scene.primitives.len(),
        "generate_svg"
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n",
        width, height, width, height
    ));

    // defs: background gradient, then the area's gradient and clip
    svg.push_str("<defs>\n");
    svg.push_str(&format!(
        "<linearGradient id=\"background-gradient\" x1=\"0.5\" y1=\"0\" x2=\"0.5\" y2=\"1\">\n\
         <stop offset=\"0\" stop-color=\"{}\"/>\n\
         <stop offset=\"1\" stop-color=\"{}\"/>\n\
         </linearGradient>\n",
        color_to_rgb(scene.background_start),
        color_to_rgb(scene.background_end),
    ));
    if let Some(area) = scene.area() {
        svg.push_str(&format!(
            "<linearGradient id=\"graph-gradient\" x1=\"0.5\" y1=\"{}\" x2=\"0.5\" y2=\"1\">\n\
             <stop offset=\"0\" stop-color=\"{}\"/>\n\
             <stop offset=\"1\" stop-color=\"{}\"/>\n\
             </linearGradient>\n",
            fmt_num(area.start_offset),
            color_to_rgb(area.start_color),
            color_to_rgb(area.end_color),
        ));
        svg.push_str(&format!(
            "<clipPath id=\"area-clip\">\n<path d=\"{}\"/>\n</clipPath>\n",
            area.path
        ));
    }
    svg.push_str("</defs>\n");

    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"url(#background-gradient)\"/>\n",
        width, height
    ));

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Area(_) => {
                // the gradient layer spans the full rectangle and the path
                // only clips it
                svg.push_str(&format!(
                    "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"url(#graph-gradient)\" clip-path=\"url(#area-clip)\"/>\n",
                    width, height
                ));
            }
            Primitive::Path(path) => {
                svg.push_str(&format!(
                    "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
                    path.data,
                    color_to_rgb(path.color),
                    fmt_num(path.width),
                ));
                if path.opacity < 1.0 {
                    svg.push_str(&format!(
                        " stroke-opacity=\"{}\"",
                        fmt_num(path.opacity)
                    ));
                }
                if path.dashed {
                    svg.push_str(&format!(
                        " stroke-dasharray=\"{}\" stroke-linecap=\"butt\"",
                        super::defaults::GRIDLINE_DASH
                    ));
                }
                svg.push_str("/>\n");
            }
            Primitive::Circle(dot) => {
                svg.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                    fmt_num(dot.center.x),
                    fmt_num(dot.center.y),
                    fmt_num(dot.radius),
                    color_to_rgb(dot.fill),
                ));
            }
            Primitive::Text(label) => {
                let anchor = match label.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"",
                    fmt_num(label.pos.x),
                    fmt_num(label.pos.y),
                    fmt_num(label.size),
                    color_to_rgb(label.color),
                    anchor,
                ));
                if label.bold {
                    svg.push_str(" font-weight=\"bold\"");
                }
                svg.push_str(&format!(">{}</text>\n", escape_text(&label.content)));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Format a number matching C's %g format (6 significant figures, trailing zeros trimmed).
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        // integer output; trailing zeros are significant here
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
