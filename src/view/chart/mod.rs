//! OHLC price chart built from fills.

mod interval;

#[cfg(test)]
mod tests;

pub use interval::{CandleInterval, ParseIntervalError};

use fastnum::UD128;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use super::Decorator;
use crate::types::{RawEvent, Sign, Timestamp};

/// Open/high/low/close prices of a single time bucket.
#[derive(Clone, Copy, derive_more::Debug, PartialEq, Serialize)]
pub struct OhlcPoint {
    /// Bucket start, Unix seconds.
    pub time: Timestamp,
    #[debug("{open}")]
    pub open: UD128,
    #[debug("{high}")]
    pub high: UD128,
    #[debug("{low}")]
    pub low: UD128,
    #[debug("{close}")]
    pub close: UD128,
}

impl OhlcPoint {
    /// Point of the prices given in arrival order, `None` if there are none.
    fn from_prices(time: Timestamp, mut prices: impl Iterator<Item = UD128>) -> Option<Self> {
        let first = prices.next()?;
        Some(prices.fold(
            Self {
                time,
                open: first,
                high: first,
                low: first,
                close: first,
            },
            |point, price| Self {
                high: point.high.max(price),
                low: point.low.min(price),
                close: price,
                ..point
            },
        ))
    }
}

/// Price chart series along with the last price summary.
#[derive(Clone, derive_more::Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChart {
    /// Price of the most recent trade, zero if there are no trades.
    #[debug("{last_price}")]
    pub last_price: UD128,

    /// Whether the last price is up or down comparing to the trade before it.
    pub last_price_change: Sign,

    /// Length of the bucket of each point.
    pub interval: CandleInterval,

    /// Points in ascending time order, one per non-empty bucket.
    pub points: Vec<OhlcPoint>,
}

impl Default for PriceChart {
    fn default() -> Self {
        Self {
            last_price: UD128::ZERO,
            last_price_change: Sign::Plus,
            interval: CandleInterval::default(),
            points: Vec::new(),
        }
    }
}

/// Build the hourly price chart.
pub fn build(decorator: &Decorator, filled: &[RawEvent]) -> PriceChart {
    build_with_interval(decorator, filled, CandleInterval::Hour1)
}

/// Build the price chart with fills bucketed by the given interval.
///
/// With a single trade the price before the last one is taken as zero,
/// so the change is [`Sign::Plus`].
pub fn build_with_interval(
    decorator: &Decorator,
    filled: &[RawEvent],
    interval: CandleInterval,
) -> PriceChart {
    let ascending = decorator.decorate_all(super::ascending(filled));

    let (last_price, second_last_price) = match ascending.as_slice() {
        [.., second_last, last] => (last.token_price(), second_last.token_price()),
        [last] => (last.token_price(), UD128::ZERO),
        [] => (UD128::ZERO, UD128::ZERO),
    };
    let last_price_change = if last_price >= second_last_price {
        Sign::Plus
    } else {
        Sign::Minus
    };

    let mut points = Vec::new();
    for (time, bucket) in &ascending
        .iter()
        .chunk_by(|order| interval.bucket_open_time(order.timestamp()))
    {
        points.extend(OhlcPoint::from_prices(
            time,
            bucket.map(|order| order.token_price()),
        ));
    }

    debug!(%interval, points = points.len(), "Price chart built");
    PriceChart {
        last_price,
        last_price_change,
        interval,
        points,
    }
}
