use serde::{Deserialize, Serialize};

/// One month of the median listing price series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: i32,
}
