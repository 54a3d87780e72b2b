use serde::{Deserialize, Serialize};

/// One slice of the property type distribution. `value` is a listing count,
/// not a percentage; slices need not sum to 100.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeShare {
    pub name: String,
    pub value: i32,
}
