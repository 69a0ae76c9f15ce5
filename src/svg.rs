//! SVG document output
//!
//! Wraps rendered symbol paths in a standalone SVG document. Coordinates are
//! in modules; the quiet zone is added through the `viewBox` so the paths
//! themselves are never moved.

use quarkit_styles::SymbolPaths;

/// Build a complete SVG document for a `width` × `height` symbol.
///
/// Eye rings are drawn as two nested circles with the same winding and
/// traced holes follow their region's winding, so every path uses the
/// even-odd fill rule.
pub fn render_document(paths: &SymbolPaths, width: usize, height: usize, margin: u32) -> String {
    let origin = -i64::from(margin);
    let view_w = width as u64 + 2 * u64::from(margin);
    let view_h = height as u64 + 2 * u64::from(margin);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        origin, origin, view_w, view_h
    ));
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#fff\"/>\n",
        origin, origin, view_w, view_h
    ));

    if !paths.modules.is_empty() {
        push_path(&mut svg, "modules", &paths.modules.to_svg_data());
    }
    for eye in &paths.eyes {
        let data = format!("{} {}", eye.outer.to_svg_data(), eye.inner.to_svg_data());
        push_path(&mut svg, "eye", &data);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_path(svg: &mut String, class: &str, data: &str) {
    svg.push_str(&format!(
        "  <path class=\"{}\" fill=\"#000\" fill-rule=\"evenodd\" d=\"{}\"/>\n",
        class, data
    ));
}
