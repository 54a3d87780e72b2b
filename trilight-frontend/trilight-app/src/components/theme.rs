use cfg_if::cfg_if;
use trilight_charts::ChartOptions;

/// Chart options seeded from the page theme, so canvas output matches the
/// surrounding markup. Falls back to the chart crate's light defaults on the
/// server, where there is no computed style to read.
pub(crate) fn theme_chart_options() -> ChartOptions {
    cfg_if! {
        if #[cfg(feature = "hydrate")] {
            let mut options = ChartOptions::default();
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(root) = document.document_element() {
                        if let Ok(Some(style)) = window.get_computed_style(&root) {
                            if let Ok(value) = style.get_property_value("--color-text") {
                                options.text_rgb = parse_css_rgb(&value);
                            }
                            if let Ok(value) = style.get_property_value("--color-outline") {
                                options.grid_rgb = parse_css_rgb(&value);
                            }
                        }
                    }
                }
            }
            options
        } else {
            ChartOptions::default()
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn parse_css_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some((r, g, b));
        }
        return None;
    }
    let v = v
        .trim_start_matches("rgba(")
        .trim_start_matches("rgb(")
        .trim_end_matches(')');
    let parts: Vec<_> = v.split(',').map(|s| s.trim()).collect();
    if parts.len() >= 3 {
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        return Some((r, g, b));
    }
    None
}
