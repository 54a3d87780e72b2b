use anyhow::anyhow;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use trilight_api_types::MonthlyVolume;

use crate::axis::{month_tick_label, padded_max, short_number};
use crate::{ChartOptions, RENTALS_COLOR, SALES_COLOR};

// Bars for one month span [x - HALF, x - GAP] and [x + GAP, x + HALF] in
// category coordinates, so the two series sit side by side.
const BAR_HALF_WIDTH: f64 = 0.30;
const BAR_GAP: f64 = 0.04;

/// Grouped bar chart of monthly sale and rental counts.
pub fn draw_transaction_volume_chart<'a, T>(
    backend: T,
    volumes: &[MonthlyVolume],
    options: ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    draw_transaction_volume_on(&root, volumes, &options)?;
    root.present()?;
    Ok(())
}

pub fn draw_transaction_volume_on<'a, T>(
    area: &DrawingArea<T, Shift>,
    volumes: &[MonthlyVolume],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    if volumes.is_empty() {
        Err(anyhow!("no transaction volumes"))?;
    }
    area.fill(&options.background_color())?;
    let text = options.text_color();
    let grid = options.grid_color();
    let months: Vec<String> = volumes.iter().map(|v| v.month.clone()).collect();
    let max = volumes
        .iter()
        .map(|v| v.sales.max(v.rentals))
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(area)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .margin(12)
        .build_cartesian_2d(-0.5..volumes.len() as f64 - 0.5, 0..padded_max(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(grid.mix(0.35))
        .light_line_style(grid.mix(0.08))
        .label_style(("sans-serif", 13).into_font().color(&text))
        .x_labels(volumes.len())
        .x_label_formatter(&|x| month_tick_label(&months, *x))
        .y_label_formatter(&|y| short_number(*y))
        .draw()?;

    chart
        .draw_series(volumes.iter().enumerate().map(|(i, v)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0), (x - BAR_GAP, v.sales)],
                SALES_COLOR.filled(),
            )
        }))?
        .label("Sales")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SALES_COLOR.filled()));

    chart
        .draw_series(volumes.iter().enumerate().map(|(i, v)| {
            let x = i as f64;
            Rectangle::new(
                [(x + BAR_GAP, 0), (x + BAR_HALF_WIDTH, v.rentals)],
                RENTALS_COLOR.filled(),
            )
        }))?
        .label("Rentals")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RENTALS_COLOR.filled()));

    if options.show_values {
        let value_style = ("sans-serif", 11)
            .into_font()
            .color(&text)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let bar_center = (BAR_HALF_WIDTH + BAR_GAP) / 2.0;
        chart.draw_series(volumes.iter().enumerate().flat_map(|(i, v)| {
            let x = i as f64;
            [
                Text::new(
                    short_number(v.sales),
                    (x - bar_center, v.sales),
                    value_style.clone(),
                ),
                Text::new(
                    short_number(v.rentals),
                    (x + bar_center, v.rentals),
                    value_style.clone(),
                ),
            ]
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

    fn volume(month: &str, sales: i32, rentals: i32) -> MonthlyVolume {
        MonthlyVolume {
            month: month.to_string(),
            sales,
            rentals,
        }
    }

    #[test]
    fn y_axis_covers_tallest_bar() {
        let volumes = vec![volume("Jan", 4000, 2400), volume("Mar", 2000, 9800)];
        let max = volumes
            .iter()
            .map(|v| v.sales.max(v.rentals))
            .max()
            .unwrap();
        assert_eq!(max, 9800);
        assert!(padded_max(max) > max);
    }
}
