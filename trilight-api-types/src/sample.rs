//! The fixed dashboard dataset. This is configuration, not computed output:
//! the values are agreed-upon figures and are never mutated after
//! construction. Replacing this module with a query against the listings
//! database is the intended path to a live dashboard.

use crate::{AnalyticsSummary, KeyMetrics, MonthlyVolume, PricePoint, PropertyTypeShare};

const TRANSACTIONS: [(&str, i32, i32); 6] = [
    ("Jan", 4000, 2400),
    ("Feb", 3000, 1398),
    ("Mar", 2000, 9800),
    ("Apr", 2780, 3908),
    ("May", 1890, 4800),
    ("Jun", 2390, 3800),
];

const MARKET_TREND: [(&str, i32); 6] = [
    ("Jan", 2400),
    ("Feb", 2210),
    ("Mar", 2290),
    ("Apr", 2000),
    ("May", 2181),
    ("Jun", 2500),
];

const PROPERTY_TYPES: [(&str, i32); 4] = [
    ("Houses", 400),
    ("Apartments", 300),
    ("Condos", 200),
    ("Townhouses", 100),
];

pub fn analytics_summary() -> AnalyticsSummary {
    AnalyticsSummary {
        transactions: TRANSACTIONS
            .iter()
            .map(|&(month, sales, rentals)| MonthlyVolume {
                month: month.to_string(),
                sales,
                rentals,
            })
            .collect(),
        market_trend: MARKET_TREND
            .iter()
            .map(|&(month, price)| PricePoint {
                month: month.to_string(),
                price,
            })
            .collect(),
        property_types: PROPERTY_TYPES
            .iter()
            .map(|&(name, value)| PropertyTypeShare {
                name: name.to_string(),
                value,
            })
            .collect(),
        key_metrics: KeyMetrics {
            total_properties: 1234,
            avg_sale_price: 350000,
            active_listings: 567,
            avg_days_on_market: 45,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_months_in_calendar_order() {
        let summary = analytics_summary();
        let months: Vec<_> = summary
            .transactions
            .iter()
            .map(|v| v.month.as_str())
            .collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        let trend_months: Vec<_> = summary
            .market_trend
            .iter()
            .map(|p| p.month.as_str())
            .collect();
        assert_eq!(trend_months, months);
    }

    #[test]
    fn transaction_literals() {
        let summary = analytics_summary();
        assert_eq!(summary.transactions.len(), 6);
        assert_eq!(summary.transactions[0].sales, 4000);
        assert_eq!(summary.transactions[0].rentals, 2400);
        assert_eq!(summary.transactions[2].rentals, 9800);
        assert_eq!(summary.transactions[5].sales, 2390);
    }

    #[test]
    fn trend_literals() {
        let prices: Vec<_> = analytics_summary()
            .market_trend
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, [2400, 2210, 2290, 2000, 2181, 2500]);
    }

    #[test]
    fn property_type_shares() {
        let types = analytics_summary().property_types;
        assert_eq!(types.len(), 4);
        assert!(types.iter().all(|t| t.value >= 0));
        assert_eq!(types[0].name, "Houses");
        assert_eq!(types[0].value, 400);
        assert_eq!(types[3].name, "Townhouses");
        assert_eq!(types[3].value, 100);
    }

    #[test]
    fn provider_is_deterministic() {
        assert_eq!(analytics_summary(), analytics_summary());
    }
}
