use serde::{Deserialize, Serialize};
use thousands::Separable;

/// The four headline numbers shown on the analytics dashboard. These are
/// independent of the chart series; the data-owning service decides how they
/// are computed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub total_properties: i32,
    pub avg_sale_price: i32,
    pub active_listings: i32,
    pub avg_days_on_market: i32,
}

impl KeyMetrics {
    pub fn total_properties_label(&self) -> String {
        self.total_properties.separate_with_commas()
    }

    pub fn avg_sale_price_label(&self) -> String {
        format!("${}", self.avg_sale_price.separate_with_commas())
    }

    pub fn active_listings_label(&self) -> String {
        self.active_listings.separate_with_commas()
    }

    pub fn avg_days_on_market_label(&self) -> String {
        self.avg_days_on_market.to_string()
    }

    /// Display order matches the dashboard card layout.
    pub fn labels(&self) -> [(&'static str, String); 4] {
        [
            ("Total Properties", self.total_properties_label()),
            ("Avg. Sale Price", self.avg_sale_price_label()),
            ("Active Listings", self.active_listings_label()),
            ("Avg. Days on Market", self.avg_days_on_market_label()),
        ]
    }
}
