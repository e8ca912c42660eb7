use colored::{ColoredString, Colorize};
use resistor_codec::Color;

/// Check if color output should be disabled
/// Respects NO_COLOR environment variable
pub fn should_disable_color() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Initialize colored crate based on NO_COLOR environment variable
pub fn init_color() {
    if should_disable_color() {
        colored::control::set_override(false);
    }
}

/// Block glyph painted in the band's color
pub fn swatch(color: Color) -> ColoredString {
    let (r, g, b) = color.rgb();
    "■".truecolor(r, g, b)
}

/// Swatch followed by the color name, or a dash for a blank band
pub fn format_band(band: Option<Color>) -> String {
    match band {
        Some(color) => format!("{} {}", swatch(color), color),
        None => "-".dimmed().to_string(),
    }
}
