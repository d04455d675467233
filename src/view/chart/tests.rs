//! Tests for the price chart.

use fastnum::udec128;

use super::*;
use crate::{
    Market,
    testing::{self, ALICE, BOB, ETHER, TOKEN},
    types::OrderSide,
};

const HOUR: u64 = 3600;

/// Fill of one token at the price.
/// trade!(id, price, timestamp)
macro_rules! trade {
    ($id:expr, $price:expr, $ts:expr) => {
        testing::fill(
            &testing::priced($id, ALICE, OrderSide::Buy, udec128!($price), $ts),
            BOB,
            $ts,
        )
    };
}

/// Assert the OHLC point.
/// assert_point!(chart, index => (time, open, high, low, close))
macro_rules! assert_point {
    ($chart:expr, $idx:expr => ($time:expr, $o:expr, $h:expr, $l:expr, $c:expr)) => {
        let point = &$chart.points[$idx];
        assert_eq!(point.time, $time, "point {} time", $idx);
        assert_eq!(point.open, udec128!($o), "point {} open", $idx);
        assert_eq!(point.high, udec128!($h), "point {} high", $idx);
        assert_eq!(point.low, udec128!($l), "point {} low", $idx);
        assert_eq!(point.close, udec128!($c), "point {} close", $idx);
    };
}

fn decorator() -> Decorator {
    Decorator::new(&Market::ethereum())
}

#[test]
fn chart_empty() {
    let chart = build(&decorator(), &[]);
    assert_eq!(chart, PriceChart::default());
    assert_eq!(chart.last_price, UD128::ZERO);
    assert_eq!(chart.last_price_change, Sign::Plus);
    assert_eq!(chart.interval, CandleInterval::Hour1);
    assert!(chart.points.is_empty());
}

#[test]
fn chart_single_trade() {
    let chart = build(&decorator(), &[trade!(1, 3.5, 10 * HOUR + 5)]);

    assert_eq!(chart.last_price, udec128!(3.5));
    assert_eq!(chart.last_price_change, Sign::Plus);
    assert_eq!(chart.points.len(), 1);
    assert_point!(chart, 0 => (10 * HOUR, 3.5, 3.5, 3.5, 3.5));
}

#[test]
fn chart_bucket_ohlc() {
    let base = 5 * HOUR;
    let filled = vec![
        trade!(1, 10, base + 10),
        trade!(2, 12, base + 20),
        trade!(3, 9, base + 30),
        trade!(4, 11, base + 40),
    ];
    let chart = build(&decorator(), &filled);

    assert_eq!(chart.points.len(), 1);
    assert_point!(chart, 0 => (base, 10, 12, 9, 11));
}

#[test]
fn chart_buckets_ascending_out_of_order_input() {
    let filled = vec![
        trade!(4, 7, 3 * HOUR + 100),
        trade!(1, 5, HOUR + 59),
        trade!(3, 8, 3 * HOUR + 1),
        trade!(2, 6, 2 * HOUR - 1),
    ];
    let chart = build(&decorator(), &filled);

    assert_eq!(chart.points.len(), 2);
    assert_point!(chart, 0 => (HOUR, 5, 6, 5, 6));
    assert_point!(chart, 1 => (3 * HOUR, 8, 8, 7, 7));

    assert_eq!(chart.last_price, udec128!(7));
    assert_eq!(chart.last_price_change, Sign::Minus);
}

#[test]
fn chart_last_price_change_equal_is_plus() {
    let filled = vec![trade!(1, 2, 100), trade!(2, 2, 200)];
    let chart = build(&decorator(), &filled);
    assert_eq!(chart.last_price, udec128!(2));
    assert_eq!(chart.last_price_change, Sign::Plus);
}

#[test]
fn chart_custom_interval() {
    let filled = vec![
        trade!(1, 1, 0),
        trade!(2, 3, 100),
        trade!(3, 2, 301),
        trade!(4, 4, HOUR),
    ];
    let chart = build_with_interval(&decorator(), &filled, CandleInterval::Minute5);

    assert_eq!(chart.interval, CandleInterval::Minute5);
    assert_eq!(chart.points.len(), 3);
    assert_point!(chart, 0 => (0, 1, 3, 1, 3));
    assert_point!(chart, 1 => (300, 2, 2, 2, 2));
    assert_point!(chart, 2 => (HOUR, 4, 4, 4, 4));

    let daily = build_with_interval(&decorator(), &filled, CandleInterval::Day1);
    assert_eq!(daily.points.len(), 1);
    assert_point!(daily, 0 => (0, 1, 4, 1, 4));
}

#[test]
fn chart_skips_malformed_fill() {
    let filled = vec![
        trade!(1, 2, 100),
        trade!(2, 3, 200),
        testing::raw(3, ALICE, TOKEN, 0, ETHER, 100, 300),
    ];
    let chart = build(&decorator(), &filled);

    assert_eq!(chart.last_price, udec128!(3));
    assert_eq!(chart.last_price_change, Sign::Plus);
    assert_point!(chart, 0 => (0, 2, 3, 2, 3));
}

#[test]
fn chart_serializes_interval() {
    let chart = build_with_interval(&decorator(), &[trade!(1, 2, 100)], CandleInterval::Hour4);
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["interval"], "4h");
    assert_eq!(json["lastPriceChange"], "+");
    assert_eq!(json["points"][0]["time"], 0);
}
