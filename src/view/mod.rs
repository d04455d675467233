//! Views derived from raw exchange events.
//!
//! Every raw event goes through the [`Decorator`] first, which computes
//! the currency and token amounts along with the token price, then builders
//! shape decorated orders into the particular view:
//!
//! - [`book::build`] - open orders split into buy and sell sides;
//! - [`history::build`] - colorized trade feed, most recent first;
//! - [`user::my_trades`] and [`user::my_open_orders`] - account perspective;
//! - [`chart::build`] - OHLC points bucketed by time.
//!
//! Builders never reorder their input slices and always return fresh values.

pub mod book;
pub mod chart;
mod colorize;
mod decorate;
pub mod history;
pub mod user;

pub use book::{OrderBook, OrderBookEntry};
pub use chart::{CandleInterval, OhlcPoint, PriceChart};
pub use colorize::{TradeRecord, colorize};
pub use decorate::{DecoratedOrder, Decorator};
pub use user::UserTradeRecord;

use itertools::Itertools;

use crate::types::RawEvent;

/// Events in ascending time order, ties keep the input order.
pub(crate) fn ascending<'a>(
    events: impl IntoIterator<Item = &'a RawEvent>,
) -> impl Iterator<Item = &'a RawEvent> {
    events.into_iter().sorted_by_key(|event| event.timestamp)
}
