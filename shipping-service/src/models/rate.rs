use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bounds of a quote, in currency units.
pub const MIN_RATE: f64 = 1.0;
pub const MAX_RATE: f64 = 100.0;

/// A shipping quote. Generated per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub value: f64,
}

impl ShippingRate {
    pub const RANGE: RangeInclusive<f64> = MIN_RATE..=MAX_RATE;

    /// Draw uniformly from [`MIN_RATE`, `MAX_RATE`] and round to cents.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let raw = rng.gen_range(Self::RANGE);
        Self {
            value: round_to_cents(raw).clamp(MIN_RATE, MAX_RATE),
        }
    }
}

/// Round half away from zero to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
