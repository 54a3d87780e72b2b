use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use trilight_api_types::{AnalyticsSummary, MonthlyVolume, PricePoint, PropertyTypeShare};
use trilight_charts::{
    draw_market_trend_chart, draw_market_trend_on, draw_property_type_chart,
    draw_property_type_on, draw_transaction_volume_chart, draw_transaction_volume_on,
    ChartOptions,
};

pub fn render_transaction_volume_chart(
    volumes: &[MonthlyVolume],
    options: ChartOptions,
    size: (u32, u32),
) -> Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_transaction_volume_chart(backend, volumes, options)
            .map_err(|e| anyhow!("failed to draw transaction volume chart: {e}"))?;
    }
    Ok(buffer)
}

pub fn render_market_trend_chart(
    prices: &[PricePoint],
    options: ChartOptions,
    size: (u32, u32),
) -> Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_market_trend_chart(backend, prices, options)
            .map_err(|e| anyhow!("failed to draw market trend chart: {e}"))?;
    }
    Ok(buffer)
}

pub fn render_property_type_chart(
    shares: &[PropertyTypeShare],
    options: ChartOptions,
    size: (u32, u32),
) -> Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_property_type_chart(backend, shares, options)
            .map_err(|e| anyhow!("failed to draw property type chart: {e}"))?;
    }
    Ok(buffer)
}

/// The whole analytics view as one SVG document: the three charts plus the
/// key metrics block, laid out in quadrants like the dashboard page.
pub fn render_analytics_sheet(summary: &AnalyticsSummary, size: (u32, u32)) -> Result<String> {
    let options = ChartOptions::default();
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        root.fill(&options.background_color())
            .map_err(|e| anyhow!("failed to fill analytics sheet: {e}"))?;
        let title_style = ("sans-serif", 18).into_font().color(&options.text_color());
        let quadrants = root.split_evenly((2, 2));

        let transactions = quadrants[0]
            .titled("Property Transactions", title_style.clone())
            .map_err(|e| anyhow!("failed to title quadrant: {e}"))?;
        draw_transaction_volume_on(&transactions, &summary.transactions, &options)
            .map_err(|e| anyhow!("failed to draw transaction volume chart: {e}"))?;

        let trend = quadrants[1]
            .titled("Market Trends", title_style.clone())
            .map_err(|e| anyhow!("failed to title quadrant: {e}"))?;
        draw_market_trend_on(&trend, &summary.market_trend, &options)
            .map_err(|e| anyhow!("failed to draw market trend chart: {e}"))?;

        let types = quadrants[2]
            .titled("Property Types", title_style.clone())
            .map_err(|e| anyhow!("failed to title quadrant: {e}"))?;
        draw_property_type_on(&types, &summary.property_types, &options)
            .map_err(|e| anyhow!("failed to draw property type chart: {e}"))?;

        let metrics = quadrants[3]
            .titled("Key Metrics", title_style)
            .map_err(|e| anyhow!("failed to title quadrant: {e}"))?;
        let label_style = ("sans-serif", 14)
            .into_font()
            .color(&options.grid_color());
        let value_style = ("sans-serif", 22)
            .into_font()
            .color(&options.text_color());
        for (i, (label, value)) in summary.key_metrics.labels().iter().enumerate() {
            let y = 24 + i as i32 * 52;
            metrics
                .draw(&Text::new(*label, (24, y), label_style.clone()))
                .map_err(|e| anyhow!("failed to draw metric label: {e}"))?;
            metrics
                .draw(&Text::new(value.clone(), (24, y + 18), value_style.clone()))
                .map_err(|e| anyhow!("failed to draw metric value: {e}"))?;
        }

        root.present()
            .map_err(|e| anyhow!("failed to finalize analytics sheet: {e}"))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trilight_api_types::sample::analytics_summary;

    const CHART_SIZE: (u32, u32) = (500, 300);

    #[test]
    fn bar_chart_shows_every_literal_value() {
        let summary = analytics_summary();
        let svg = render_transaction_volume_chart(
            &summary.transactions,
            ChartOptions::default(),
            CHART_SIZE,
        )
        .unwrap();
        for month in ["Jan", "Feb", "Mar", "Apr", "May", "Jun"] {
            assert!(svg.contains(month), "missing month label {month}");
        }
        // value labels carry the exact dataset values
        for value in ["4.00K", "3.00K", "9.80K", "3.91K", "4.80K", "3.80K"] {
            assert!(svg.contains(value), "missing value label {value}");
        }
        assert!(svg.contains("Sales"));
        assert!(svg.contains("Rentals"));
    }

    #[test]
    fn line_chart_shows_every_price() {
        let summary = analytics_summary();
        let svg =
            render_market_trend_chart(&summary.market_trend, ChartOptions::default(), CHART_SIZE)
                .unwrap();
        for value in ["2.40K", "2.21K", "2.29K", "2.00K", "2.18K", "2.50K"] {
            assert!(svg.contains(value), "missing price label {value}");
        }
        assert!(svg.contains("Median Price"));
    }

    #[test]
    fn donut_has_one_slice_per_category() {
        let summary = analytics_summary();
        let svg =
            render_property_type_chart(&summary.property_types, ChartOptions::default(), CHART_SIZE)
                .unwrap();
        assert_eq!(svg.matches("<polygon").count(), 4);
        for name in ["Houses", "Apartments", "Condos", "Townhouses"] {
            assert!(svg.contains(name), "missing legend entry {name}");
        }
        for value in ["400", "300", "200", "100"] {
            assert!(svg.contains(value), "missing raw value {value}");
        }
    }

    #[test]
    fn sheet_includes_charts_and_metrics() {
        let svg = render_analytics_sheet(&analytics_summary(), (1000, 720)).unwrap();
        for title in [
            "Property Transactions",
            "Market Trends",
            "Property Types",
            "Key Metrics",
        ] {
            assert!(svg.contains(title), "missing section title {title}");
        }
        for value in ["1,234", "$350,000", "567", "45"] {
            assert!(svg.contains(value), "missing metric value {value}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let summary = analytics_summary();
        let first = render_analytics_sheet(&summary, (1000, 720)).unwrap();
        let second = render_analytics_sheet(&summary, (1000, 720)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_series_are_rejected() {
        assert!(render_transaction_volume_chart(&[], ChartOptions::default(), CHART_SIZE).is_err());
        assert!(render_market_trend_chart(&[], ChartOptions::default(), CHART_SIZE).is_err());
        assert!(render_property_type_chart(&[], ChartOptions::default(), CHART_SIZE).is_err());
    }
}
