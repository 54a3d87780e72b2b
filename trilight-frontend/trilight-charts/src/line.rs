use anyhow::anyhow;
use itertools::Itertools;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use trilight_api_types::PricePoint;

use crate::axis::{month_tick_label, padded_range, short_number};
use crate::interpolate::monotone_path;
use crate::{ChartOptions, PRICE_COLOR};

const SAMPLES_PER_SEGMENT: usize = 16;

/// Median price trend as a monotone-interpolated line with control point
/// markers.
pub fn draw_market_trend_chart<'a, T>(
    backend: T,
    prices: &[PricePoint],
    options: ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    draw_market_trend_on(&root, prices, &options)?;
    root.present()?;
    Ok(())
}

pub fn draw_market_trend_on<'a, T>(
    area: &DrawingArea<T, Shift>,
    prices: &[PricePoint],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let (min, max) = prices
        .iter()
        .map(|p| p.price)
        .minmax()
        .into_option()
        .ok_or(anyhow!("no price points"))?;
    if prices.len() == 1 {
        log::warn!("market trend has a single point, drawing a marker without a line");
    }
    area.fill(&options.background_color())?;
    let text = options.text_color();
    let grid = options.grid_color();
    let months: Vec<String> = prices.iter().map(|p| p.month.clone()).collect();
    let (y_min, y_max) = padded_range(min, max);

    let mut chart = ChartBuilder::on(area)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .margin(12)
        .build_cartesian_2d(-0.5..prices.len() as f64 - 0.5, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(grid.mix(0.35))
        .light_line_style(grid.mix(0.08))
        .label_style(("sans-serif", 13).into_font().color(&text))
        .x_labels(prices.len())
        .x_label_formatter(&|x| month_tick_label(&months, *x))
        .y_label_formatter(&|y| short_number(y.round() as i32))
        .draw()?;

    let points: Vec<(f64, f64)> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price as f64))
        .collect();

    chart
        .draw_series(LineSeries::new(
            monotone_path(&points, SAMPLES_PER_SEGMENT),
            PRICE_COLOR.stroke_width(2),
        ))?
        .label("Median Price")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 16, y)], PRICE_COLOR.stroke_width(2))
        });

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, PRICE_COLOR.filled())),
    )?;

    if options.show_values {
        let value_style = ("sans-serif", 11)
            .into_font()
            .color(&text)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let offset = (y_max - y_min) * 0.03;
        chart.draw_series(points.iter().zip(prices).map(|(&(x, y), p)| {
            Text::new(short_number(p.price), (x, y + offset), value_style.clone())
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(grid)
        .background_style(options.background_color().mix(0.85))
        .label_font(("sans-serif", 13).into_font().color(&text))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_stays_between_adjacent_prices() {
        let prices: Vec<PricePoint> = [2400, 2210, 2290, 2000, 2181, 2500]
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                month: format!("M{i}"),
                price,
            })
            .collect();
        let points: Vec<(f64, f64)> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.price as f64))
            .collect();
        let path = monotone_path(&points, SAMPLES_PER_SEGMENT);
        for (x, y) in path {
            let k = (x.floor() as usize).min(points.len() - 2);
            let lo = points[k].1.min(points[k + 1].1);
            let hi = points[k].1.max(points[k + 1].1);
            assert!(y >= lo - 1e-9 && y <= hi + 1e-9);
        }
    }
}
