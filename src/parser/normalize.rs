use csscolorparser::Color;

/// Canonicalize any CSS color value to lowercase "#rrggbb".
/// Handles: hex (3/4/6/8 digit), rgb, hsl, oklch, named colors.
/// Alpha is dropped — the date mapping reads only the six RGB digits.
/// Returns None for: transparent, inherit, currentColor, unrecognized.
///
/// The widget's `<input type="color">` already emits "#rrggbb", but swatches
/// sampled from the gradient canvas and theme values arrive in whatever form
/// CSS produced them in.
pub fn normalize_color(value: &str) -> Option<String> {
    let trimmed = value.trim();

    // Special values -> None
    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    // Direct hex (normalize 3->6 digit, drop alpha from 4/8 digit)
    if let Some(raw) = trimmed.strip_prefix('#') {
        if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match raw.len() {
            3 | 4 => {
                let expanded: String = raw.chars().take(3).flat_map(|c| [c, c]).collect();
                Some(format!("#{}", expanded.to_lowercase()))
            }
            6 | 8 => Some(format!("#{}", raw[0..6].to_lowercase())),
            _ => None,
        };
    }

    // Use csscolorparser for everything else (rgb, hsl, oklch, named, etc.)
    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Some(format!("#{r:02x}{g:02x}{b:02x}"))
        }
        Err(_) => None,
    }
}
