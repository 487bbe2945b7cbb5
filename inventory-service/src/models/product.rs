use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Typed view of one catalog entry, used to check the backing file.
///
/// The file itself is served as decoded; keys outside these six are allowed
/// and ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub quantity: i64,
    /// Raw JSON number, so integer and float prices are both accepted.
    pub price: Number,
    /// URL or path of the cover image.
    pub photo: String,
}

impl Product {
    /// Price as a float, for checks and display only.
    pub fn price_value(&self) -> f64 {
        self.price.as_f64().unwrap_or(f64::NAN)
    }
}
