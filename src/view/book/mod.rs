//! Order book of open orders.
//!
//! Open orders are all placed orders that were neither filled nor cancelled,
//! split into buy and sell sides and sorted with the best price first.


use std::collections::HashSet;

use fastnum::UD128;
use serde::Serialize;
use tracing::debug;

use super::{DecoratedOrder, Decorator};
use crate::types::{self, Color, OrderSide, RawEvent};

/// Open order classified by its side.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookEntry {
    #[serde(flatten)]
    pub order: DecoratedOrder,

    /// Side of the order.
    pub order_type: OrderSide,

    /// Display color of the side.
    pub order_type_class: Color,

    /// Side of the action filling this order.
    pub order_fill_class: OrderSide,
}

impl OrderBookEntry {
    fn new(order: DecoratedOrder) -> Self {
        let order_type = order.side();
        Self {
            order,
            order_type,
            order_type_class: order_type.color(),
            order_fill_class: order_type.opposite(),
        }
    }

    pub fn price(&self) -> UD128 {
        self.order.token_price()
    }
}

/// Open orders split by side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderBook {
    buy: Vec<OrderBookEntry>,
    sell: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Buy orders, highest price first.
    pub fn buy(&self) -> &[OrderBookEntry] {
        &self.buy
    }

    /// Sell orders, lowest price first.
    pub fn sell(&self) -> &[OrderBookEntry] {
        &self.sell
    }

    pub fn best_bid(&self) -> Option<UD128> {
        self.buy.first().map(OrderBookEntry::price)
    }

    pub fn best_ask(&self) -> Option<UD128> {
        self.sell.first().map(OrderBookEntry::price)
    }

    /// Difference between the best ask and the best bid,
    /// `None` if either side is empty or the book is crossed.
    pub fn spread(&self) -> Option<UD128> {
        let (bid, ask) = (self.best_bid()?, self.best_ask()?);
        (ask >= bid).then(|| ask - bid)
    }

    /// Book limited to `depth` best orders per side, zero means all.
    pub fn depth(&self, depth: usize) -> Self {
        let take = |side: &[OrderBookEntry]| {
            let count = if depth == 0 { side.len() } else { depth.min(side.len()) };
            side[..count].to_vec()
        };
        Self {
            buy: take(&self.buy),
            sell: take(&self.sell),
        }
    }

    /// Total number of open orders.
    pub fn len(&self) -> usize {
        self.buy.len() + self.sell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }
}

/// Orders of `all` whose IDs are neither in `filled` nor in `cancelled`,
/// in their original order.
pub fn open_orders<'a>(
    all: &'a [RawEvent],
    filled: &[RawEvent],
    cancelled: &[RawEvent],
) -> Vec<&'a RawEvent> {
    let closed: HashSet<types::OrderId> = filled
        .iter()
        .chain(cancelled.iter())
        .map(|event| event.id)
        .collect();
    all.iter()
        .filter(|order| !closed.contains(&order.id))
        .collect()
}

/// Build the order book from the raw order sets.
///
/// Buy side is sorted by price descending (best bid first), sell side
/// ascending (best ask first). Orders at equal price keep arrival order.
pub fn build(
    decorator: &Decorator,
    all: &[RawEvent],
    filled: &[RawEvent],
    cancelled: &[RawEvent],
) -> OrderBook {
    let (mut buy, mut sell): (Vec<_>, Vec<_>) = decorator
        .decorate_all(open_orders(all, filled, cancelled))
        .into_iter()
        .map(OrderBookEntry::new)
        .partition(|entry| entry.order_type == OrderSide::Buy);

    buy.sort_by(|a, b| b.price().cmp(&a.price()));
    sell.sort_by(|a, b| a.price().cmp(&b.price()));

    debug!(buy = buy.len(), sell = sell.len(), "Order book built");
    OrderBook { buy, sell }
}
