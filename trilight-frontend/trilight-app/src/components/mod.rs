pub(crate) mod chart_canvas;
pub(crate) mod icon;
pub(crate) mod market_trend_chart;
pub(crate) mod metric_card;
pub(crate) mod property_type_chart;
pub(crate) mod skeleton;
pub(crate) mod theme;
pub(crate) mod transaction_volume_chart;
