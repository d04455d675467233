mod event;
mod order;

pub use event::RawEvent;
pub use order::{Color, OrderSide, PriceDirection, Sign};

/// ID of the order, unique across all event kinds.
/// Fill and cancellation events carry the ID of the order they refer to.
pub type OrderId = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;
