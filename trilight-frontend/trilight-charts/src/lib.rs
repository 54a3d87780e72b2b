mod axis;
mod bar;
mod donut;
mod interpolate;
mod line;

pub use bar::{draw_transaction_volume_chart, draw_transaction_volume_on};
pub use donut::{
    draw_property_type_chart, draw_property_type_on, segment_layout, DonutSegment, SLICE_GAP_DEG,
};
pub use interpolate::monotone_path;
pub use line::{draw_market_trend_chart, draw_market_trend_on};

use plotters::style::{RGBColor, WHITE};

/// Slice palette, assigned cyclically by index: slice `i` always gets
/// `PALETTE[i % PALETTE.len()]`.
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0x00, 0x88, 0xFE),
    RGBColor(0x00, 0xC4, 0x9F),
    RGBColor(0xFF, 0xBB, 0x28),
    RGBColor(0xFF, 0x80, 0x42),
];

pub const SALES_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xD8);
pub const RENTALS_COLOR: RGBColor = RGBColor(0x82, 0xCA, 0x9D);
pub const PRICE_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xD8);

/// Rendering knobs shared by all three charts. The app fills the `*_rgb`
/// fields from the page's CSS theme so canvas output matches the surrounding
/// markup; they default to a neutral light theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub text_rgb: Option<(u8, u8, u8)>,
    pub grid_rgb: Option<(u8, u8, u8)>,
    pub background_rgb: Option<(u8, u8, u8)>,
    /// Draw the exact value next to each bar, point, and slice. The static
    /// counterpart of a hover tooltip.
    pub show_values: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            text_rgb: None,
            grid_rgb: None,
            background_rgb: None,
            show_values: true,
        }
    }
}

impl ChartOptions {
    pub fn text_color(&self) -> RGBColor {
        rgb_or(self.text_rgb, RGBColor(55, 65, 81))
    }

    pub fn grid_color(&self) -> RGBColor {
        rgb_or(self.grid_rgb, RGBColor(156, 163, 175))
    }

    pub fn background_color(&self) -> RGBColor {
        rgb_or(self.background_rgb, WHITE)
    }
}

fn rgb_or(value: Option<(u8, u8, u8)>, fallback: RGBColor) -> RGBColor {
    value
        .map(|(r, g, b)| RGBColor(r, g, b))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_fallbacks() {
        let options = ChartOptions::default();
        assert!(options.show_values);
        assert_eq!(options.background_color(), WHITE);

        let themed = ChartOptions {
            text_rgb: Some((10, 20, 30)),
            ..Default::default()
        };
        assert_eq!(themed.text_color(), RGBColor(10, 20, 30));
    }
}
