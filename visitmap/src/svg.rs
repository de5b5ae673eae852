use crate::scene::MapScene;
use std::fmt::Write;

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone SVG document for a scene. Output is deterministic for a given
/// scene, so it doubles as a snapshot of the rendered state.
pub fn scene_to_svg(scene: &MapScene) -> String {
    let mut s = String::new();
    let _ = write!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" preserveAspectRatio="xMidYMid meet">"#,
        scene.view_box()
    );
    let _ = write!(
        s,
        concat!(
            r#"<defs><filter id="{}" x="-50%" y="-50%" width="200%" height="200%">"#,
            r#"<feGaussianBlur stdDeviation="{}" result="coloredBlur"/>"#,
            r#"<feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
            r#"</filter></defs>"#
        ),
        escape_xml(&scene.glow.id),
        scene.glow.std_deviation
    );
    let _ = write!(
        s,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        scene.width,
        scene.height,
        escape_xml(&scene.background)
    );
    for shape in &scene.shapes {
        s.push_str(r#"<g class="municipality-group">"#);
        let _ = write!(
            s,
            r#"<path class="city" id="{}" d="{}" data-city="{}" data-region="{}""#,
            escape_xml(&shape.id),
            shape.path,
            escape_xml(&shape.name),
            escape_xml(&shape.subdivision_id)
        );
        for (name, value) in shape.style.attributes() {
            if let Some(v) = value {
                let _ = write!(s, r#" {}="{}""#, name, escape_xml(&v));
            }
        }
        s.push_str(r#" cursor="pointer"/>"#);
        let _ = write!(
            s,
            concat!(
                r#"<text class="municipality-label" x="{}" y="{}" text-anchor="middle" "#,
                r#"dominant-baseline="middle" font-size="{}" font-weight="{}" fill="{}" "#,
                r#"pointer-events="none">{}</text>"#
            ),
            shape.label.x,
            shape.label.y,
            escape_xml(&scene.label_style.font_size),
            escape_xml(&scene.label_style.font_weight),
            escape_xml(&scene.label_style.color),
            escape_xml(&shape.label.text)
        );
        let _ = write!(s, "<title>{}</title></g>", escape_xml(&shape.name));
    }
    s.push_str("</svg>");
    s
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("Prishtinë"), "Prishtinë");
    }
}
