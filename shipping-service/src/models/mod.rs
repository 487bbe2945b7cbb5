pub mod rate;

pub use rate::ShippingRate;
