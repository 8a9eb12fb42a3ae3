use css_color_parser::Color;

/// Resolves a catalog color string to straight RGBA with components in
/// `[0, 1]`.
///
/// Accepts CSS color names and hex codes, plus the Matplotlib one-letter
/// codes the catalogs use for generic entries. Colormap names (e.g.
/// `"Reds"`) are not single colors and resolve to `None`; callers keep the
/// raw string for those.
pub fn resolve_color(spec: &str) -> Option<[f32; 4]> {
    let css = match spec {
        "b" => "blue",
        "g" => "green",
        "r" => "red",
        "c" => "cyan",
        "m" => "magenta",
        "y" => "yellow",
        "k" => "black",
        "w" => "white",
        other => other,
    };
    css.parse::<Color>().ok().map(|color| {
        [
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]
    })
}
