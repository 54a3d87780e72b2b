mod key_metrics;
mod monthly_volume;
mod price_point;
mod property_type;

pub mod sample;

pub use key_metrics::KeyMetrics;
pub use monthly_volume::MonthlyVolume;
pub use price_point::PricePoint;
pub use property_type::PropertyTypeShare;

use serde::{Deserialize, Serialize};

/// Everything the analytics view needs: the three chart series plus the
/// headline metrics. Today this comes from [`sample::analytics_summary`];
/// a live data service can produce the same shape later without any change
/// to the renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub transactions: Vec<MonthlyVolume>,
    pub market_trend: Vec<PricePoint>,
    pub property_types: Vec<PropertyTypeShare>,
    pub key_metrics: KeyMetrics,
}
