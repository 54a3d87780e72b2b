//! Axis label and range helpers shared by the bar and line charts.

pub(crate) fn short_number(value: i32) -> String {
    match value {
        1000000.. => {
            format!("{:.2}mil", value as f32 / 1000000.0)
        }
        1000..=999999 => {
            format!("{:.2}K", value as f32 / 1000.0)
        }
        _ => value.to_string(),
    }
}

/// Category ticks land on whole numbers; anything else gets an empty label.
pub(crate) fn month_tick_label(months: &[String], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    months.get(nearest as usize).cloned().unwrap_or_default()
}

/// Top of the y axis for a bar chart: 10% headroom, rounded up to half an
/// order of magnitude so the top gridline lands on a clean value.
pub(crate) fn padded_max(max: i32) -> i32 {
    if max <= 0 {
        return 1;
    }
    let raw = max as f64 * 1.1;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = magnitude / 2.0;
    ((raw / step).ceil() * step) as i32
}

/// y range for the line chart: pad both ends so the curve never touches the
/// frame.
pub(crate) fn padded_range(min: i32, max: i32) -> (f64, f64) {
    let span = (max - min).max(1) as f64;
    let pad = span * 0.15;
    (min as f64 - pad, max as f64 + pad)
}
