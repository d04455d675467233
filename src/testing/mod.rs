//! Raw event fixtures for unit and integration tests.
//!
//! Amounts are given as decimals of an 18-decimals currency/token and
//! converted to smallest units, which matches [`crate::Market::ethereum`].
//! [`raw`] builds an event from plain integer amounts.
//!

use alloy_primitives::{Address, U256, address};
use fastnum::{UD128, udec128};

use crate::{
    num,
    types::{OrderId, OrderSide, RawEvent, Timestamp},
};

const DECIMALS: u8 = 18;

/// Native currency sentinel of [`crate::Market::ethereum`].
pub const ETHER: Address = Address::ZERO;

pub const TOKEN: Address = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");

pub const ALICE: Address = address!("0x70997970c51812dc3a010c7d01b50e0d17dc79c8");

pub const BOB: Address = address!("0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc");

pub const CAROL: Address = address!("0x90f79bf6eb2c4f870365e785982e1f101e93b906");

/// Smallest units of the decimal amount.
pub fn units(amount: UD128) -> U256 {
    num::Converter::new(DECIMALS).to_unsigned(amount)
}

/// Order giving `ether` for `tokens`.
pub fn buy(
    id: OrderId,
    user: Address,
    ether: UD128,
    tokens: UD128,
    timestamp: Timestamp,
) -> RawEvent {
    RawEvent {
        id,
        user,
        user_fill: None,
        token_get: TOKEN,
        amount_get: units(tokens),
        token_give: ETHER,
        amount_give: units(ether),
        timestamp,
    }
}

/// Order giving `tokens` for `ether`.
pub fn sell(
    id: OrderId,
    user: Address,
    tokens: UD128,
    ether: UD128,
    timestamp: Timestamp,
) -> RawEvent {
    RawEvent {
        id,
        user,
        user_fill: None,
        token_get: ETHER,
        amount_get: units(ether),
        token_give: TOKEN,
        amount_give: units(tokens),
        timestamp,
    }
}

/// Order of one token at the given price.
pub fn priced(
    id: OrderId,
    user: Address,
    side: OrderSide,
    price: UD128,
    timestamp: Timestamp,
) -> RawEvent {
    match side {
        OrderSide::Buy => buy(id, user, price, udec128!(1), timestamp),
        OrderSide::Sell => sell(id, user, udec128!(1), price, timestamp),
    }
}

/// Event with amounts given in smallest units.
pub fn raw(
    id: OrderId,
    user: Address,
    token_get: Address,
    amount_get: u64,
    token_give: Address,
    amount_give: u64,
    timestamp: Timestamp,
) -> RawEvent {
    RawEvent {
        id,
        user,
        user_fill: None,
        token_get,
        amount_get: U256::from(amount_get),
        token_give,
        amount_give: U256::from(amount_give),
        timestamp,
    }
}

/// Fill of the order by `taker` at `timestamp`.
pub fn fill(order: &RawEvent, taker: Address, timestamp: Timestamp) -> RawEvent {
    RawEvent {
        user_fill: Some(taker),
        timestamp,
        ..order.clone()
    }
}

/// Cancellation of the order at `timestamp`.
pub fn cancel(order: &RawEvent, timestamp: Timestamp) -> RawEvent {
    RawEvent {
        timestamp,
        ..order.clone()
    }
}
