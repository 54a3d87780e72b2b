use serde::{Deserialize, Serialize};

/// One month of sale and rental transaction counts. Series are ordered by
/// calendar month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub month: String,
    pub sales: i32,
    pub rentals: i32,
}
