use leptos::prelude::*;
use leptos_meta::Title;
use trilight_api_types::sample;

use crate::components::market_trend_chart::MarketTrendChart;
use crate::components::metric_card::MetricCard;
use crate::components::property_type_chart::PropertyTypeChart;
use crate::components::transaction_volume_chart::TransactionVolumeChart;

/// The analytics dashboard: three charts and the key metric cards, laid out
/// as a 2x2 panel grid.
#[component]
pub fn AnalyticsView() -> impl IntoView {
    let summary = sample::analytics_summary();
    let metrics = summary.key_metrics.clone();

    view! {
        <Title text="TriLight Homes Analytics" />
        <div class="container mx-auto p-4">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="panel p-4">
                    <h2 class="text-xl font-semibold mb-4">"Property Transactions"</h2>
                    <TransactionVolumeChart volumes=summary.transactions />
                </section>
                <section class="panel p-4">
                    <h2 class="text-xl font-semibold mb-4">"Market Trends"</h2>
                    <MarketTrendChart prices=summary.market_trend />
                </section>
                <section class="panel p-4">
                    <h2 class="text-xl font-semibold mb-4">"Property Types"</h2>
                    <PropertyTypeChart shares=summary.property_types />
                </section>
                <section class="panel p-4">
                    <h2 class="text-xl font-semibold mb-4">"Key Metrics"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <MetricCard
                            label="Total Properties"
                            value=metrics.total_properties_label()
                            icon=icondata::FaHouseSolid
                            border_color="border-l-blue-500"
                        />
                        <MetricCard
                            label="Avg. Sale Price"
                            value=metrics.avg_sale_price_label()
                            icon=icondata::FaCoinsSolid
                            border_color="border-l-emerald-500"
                        />
                        <MetricCard
                            label="Active Listings"
                            value=metrics.active_listings_label()
                            icon=icondata::FaListSolid
                            border_color="border-l-amber-500"
                        />
                        <MetricCard
                            label="Avg. Days on Market"
                            value=metrics.avg_days_on_market_label()
                            icon=icondata::FaClockSolid
                            border_color="border-l-purple-500"
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}
