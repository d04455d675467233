//! Trade price direction coloring.

use fastnum::UD128;
use serde::Serialize;

use super::DecoratedOrder;
use crate::types::{Color, PriceDirection};

/// Decorated fill with the price direction relative to the previous trade.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(flatten)]
    pub order: DecoratedOrder,
    pub price_direction: PriceDirection,
}

impl TradeRecord {
    /// Display color of the trade price.
    pub fn price_class(&self) -> Color {
        self.price_direction.color()
    }
}

/// Colors trades given in ascending time order.
///
/// The first trade is always [`PriceDirection::Up`], each next one is up
/// if its price is not lower than the price of the trade before it.
/// Output keeps the input order.
pub fn colorize(ascending: Vec<DecoratedOrder>) -> Vec<TradeRecord> {
    let capacity = ascending.len();
    let (records, _) = ascending.into_iter().fold(
        (Vec::with_capacity(capacity), None::<UD128>),
        |(mut records, previous), order| {
            let price = order.token_price();
            let price_direction = match previous {
                Some(previous) if price < previous => PriceDirection::Down,
                _ => PriceDirection::Up,
            };
            records.push(TradeRecord {
                order,
                price_direction,
            });
            (records, Some(price))
        },
    );
    records
}
