use anyhow::bail;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use trilight_api_types::PropertyTypeShare;

use crate::{ChartOptions, PALETTE};

/// Gap between adjacent slices, in degrees.
pub const SLICE_GAP_DEG: f64 = 5.0;

const INNER_RADIUS_RATIO: f64 = 0.75;
const LEGEND_HEIGHT: i32 = 26;

/// One laid-out donut slice. Angles are degrees clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub fraction: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub color_index: usize,
}

impl DonutSegment {
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Compute slice geometry: each slice's fraction is `value / sum(values)` of
/// the gap-adjusted circle, and slice `i` gets palette index `i mod 4`.
pub fn segment_layout(shares: &[PropertyTypeShare]) -> anyhow::Result<Vec<DonutSegment>> {
    if shares.is_empty() {
        bail!("no property type shares");
    }
    if let Some(bad) = shares.iter().find(|s| s.value < 0) {
        bail!("negative share value for {}", bad.name);
    }
    let total: i64 = shares.iter().map(|s| s.value as i64).sum();
    if total == 0 {
        bail!("property type shares sum to zero");
    }
    let gap = if shares.len() > 1 { SLICE_GAP_DEG } else { 0.0 };
    let sweep_total = 360.0 - gap * shares.len() as f64;

    let mut segments = Vec::with_capacity(shares.len());
    let mut cursor = 0.0;
    for (i, share) in shares.iter().enumerate() {
        let fraction = share.value as f64 / total as f64;
        let end_deg = cursor + fraction * sweep_total;
        segments.push(DonutSegment {
            fraction,
            start_deg: cursor,
            end_deg,
            color_index: i % PALETTE.len(),
        });
        cursor = end_deg + gap;
    }
    Ok(segments)
}

/// Donut chart of the property type distribution, with a bottom legend.
pub fn draw_property_type_chart<'a, T>(
    backend: T,
    shares: &[PropertyTypeShare],
    options: ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    draw_property_type_on(&root, shares, &options)?;
    root.present()?;
    Ok(())
}

pub fn draw_property_type_on<'a, T>(
    area: &DrawingArea<T, Shift>,
    shares: &[PropertyTypeShare],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let segments = segment_layout(shares)?;
    area.fill(&options.background_color())?;
    let text = options.text_color();

    let (w, h) = area.dim_in_pixel();
    let plot_h = h.saturating_sub(LEGEND_HEIGHT as u32);
    let cx = w as i32 / 2;
    let cy = plot_h as i32 / 2;
    let r_outer = (w.min(plot_h) as f64 / 2.0 - 28.0).max(10.0);
    let r_inner = r_outer * INNER_RADIUS_RATIO;

    let value_style = ("sans-serif", 12)
        .into_font()
        .color(&text)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (segment, share) in segments.iter().zip(shares) {
        area.draw(&Polygon::new(
            annulus_sector(cx, cy, r_inner, r_outer, segment.start_deg, segment.end_deg),
            PALETTE[segment.color_index].filled(),
        ))?;
        if options.show_values {
            let (x, y) = polar(cx, cy, r_outer + 14.0, segment.mid_deg());
            area.draw(&Text::new(
                share.value.to_string(),
                (x, y),
                value_style.clone(),
            ))?;
        }
    }

    let legend_style = ("sans-serif", 12).into_font().color(&text);
    let mut x = 12;
    let y = h as i32 - LEGEND_HEIGHT + 6;
    for (segment, share) in segments.iter().zip(shares) {
        area.draw(&Rectangle::new(
            [(x, y), (x + 10, y + 10)],
            PALETTE[segment.color_index].filled(),
        ))?;
        area.draw(&Text::new(share.name.clone(), (x + 14, y), legend_style.clone()))?;
        x += 26 + share.name.len() as i32 * 7;
    }

    Ok(())
}

fn polar(cx: i32, cy: i32, radius: f64, deg: f64) -> (i32, i32) {
    let rad = deg.to_radians();
    (
        (cx as f64 + radius * rad.sin()).round() as i32,
        (cy as f64 - radius * rad.cos()).round() as i32,
    )
}

// Sampled annulus sector: the outer arc forward, then the inner arc back.
fn annulus_sector(
    cx: i32,
    cy: i32,
    r_inner: f64,
    r_outer: f64,
    start_deg: f64,
    end_deg: f64,
) -> Vec<(i32, i32)> {
    let sweep = (end_deg - start_deg).max(0.0);
    let steps = (sweep.ceil() as usize).max(2);
    let mut points = Vec::with_capacity(2 * (steps + 1));
    for s in 0..=steps {
        let deg = start_deg + sweep * s as f64 / steps as f64;
        points.push(polar(cx, cy, r_outer, deg));
    }
    for s in (0..=steps).rev() {
        let deg = start_deg + sweep * s as f64 / steps as f64;
        points.push(polar(cx, cy, r_inner, deg));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(name: &str, value: i32) -> PropertyTypeShare {
        PropertyTypeShare {
            name: name.to_string(),
            value,
        }
    }

    fn listing_shares() -> Vec<PropertyTypeShare> {
        vec![
            share("Houses", 400),
            share("Apartments", 300),
            share("Condos", 200),
            share("Townhouses", 100),
        ]
    }

    #[test]
    fn one_segment_per_category() {
        let segments = segment_layout(&listing_shares()).unwrap();
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn fractions_are_value_over_sum() {
        let segments = segment_layout(&listing_shares()).unwrap();
        let fractions: Vec<f64> = segments.iter().map(|s| s.fraction).collect();
        assert_eq!(fractions, vec![0.4, 0.3, 0.2, 0.1]);
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn palette_cycles_by_index() {
        let shares: Vec<PropertyTypeShare> =
            (0..6).map(|i| share(&format!("T{i}"), 10)).collect();
        let segments = segment_layout(&shares).unwrap();
        let indexes: Vec<usize> = segments.iter().map(|s| s.color_index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn sweeps_and_gaps_cover_the_circle() {
        let segments = segment_layout(&listing_shares()).unwrap();
        let last = segments.last().unwrap();
        assert!((last.end_deg + SLICE_GAP_DEG - 360.0).abs() < 1e-9);
        for pair in segments.windows(2) {
            assert!((pair[1].start_deg - pair[0].end_deg - SLICE_GAP_DEG).abs() < 1e-9);
        }
    }

    #[test]
    fn single_share_fills_the_circle() {
        let segments = segment_layout(&[share("Houses", 42)]).unwrap();
        assert_eq!(segments.len(), 1);
        assert!((segments[0].end_deg - 360.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(segment_layout(&[]).is_err());
        assert!(segment_layout(&[share("a", 0), share("b", 0)]).is_err());
        assert!(segment_layout(&[share("a", -1), share("b", 2)]).is_err());
    }

    #[test]
    fn sector_polygon_is_closed_ring() {
        let points = annulus_sector(100, 100, 40.0, 60.0, 0.0, 90.0);
        assert!(points.len() >= 6);
        // first point sits on the outer radius at 12 o'clock
        assert_eq!(points[0], (100, 40));
        // last point sits on the inner radius at the start angle
        assert_eq!(*points.last().unwrap(), (100, 60));
    }
}
