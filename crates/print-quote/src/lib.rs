pub mod quote;

mod constants;
mod costs;
mod options;
mod shipping;
mod types;

pub use costs::{CostTable, MarginRates, PressCost, lookup_margin};
pub use options::*;
pub use quote::{CostComponents, assemble, compute_book_price, compute_flyer_price};
pub use shipping::{ShippingEstimate, estimate_shipping};
pub use types::*;
