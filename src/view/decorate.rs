//! Raw event decoration.

use alloy_primitives::Address;
use chrono::{DateTime, FixedOffset};
use fastnum::UD128;
use serde::Serialize;
use tracing::warn;

use crate::{
    Market,
    error::{MalformedReason, Result, ViewError},
    num,
    types::{self, OrderSide, RawEvent},
};

/// Display format of the order timestamp, e.g. `1:05:09 pm 18/10`.
const TIMESTAMP_FORMAT: &str = "%-I:%M:%S %P %-d/%-m";

/// Raw event with currency/token amounts and price computed.
#[derive(Clone, derive_more::Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedOrder {
    #[serde(flatten)]
    event: RawEvent,
    side: OrderSide,
    #[debug("{ether_amount}")]
    ether_amount: UD128,
    #[debug("{token_amount}")]
    token_amount: UD128,
    #[debug("{token_price}")]
    token_price: UD128,
    formatted_timestamp: String,
}

impl DecoratedOrder {
    /// The event this order was decorated from.
    pub fn event(&self) -> &RawEvent {
        &self.event
    }

    pub fn id(&self) -> types::OrderId {
        self.event.id
    }

    /// Address that created the order.
    pub fn user(&self) -> Address {
        self.event.user
    }

    /// Address that filled the order, fills only.
    pub fn user_fill(&self) -> Option<Address> {
        self.event.user_fill
    }

    pub fn timestamp(&self) -> types::Timestamp {
        self.event.timestamp
    }

    /// Side of the order from its creator's perspective.
    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Amount of the native currency.
    pub fn ether_amount(&self) -> UD128 {
        self.ether_amount
    }

    /// Amount of the token.
    pub fn token_amount(&self) -> UD128 {
        self.token_amount
    }

    /// Native currency per token, rounded to [`num::PRICE_DECIMALS`] places.
    pub fn token_price(&self) -> UD128 {
        self.token_price
    }

    pub fn formatted_timestamp(&self) -> &str {
        &self.formatted_timestamp
    }
}

/// Decorates raw events of a particular [`Market`].
#[derive(Clone, Debug)]
pub struct Decorator {
    ether: Address,
    currency_converter: num::Converter,
    token_converter: num::Converter,
    display_offset: FixedOffset,
}

impl Decorator {
    pub fn new(market: &Market) -> Self {
        Self {
            ether: market.ether(),
            currency_converter: num::Converter::new(market.currency_decimals()),
            token_converter: num::Converter::new(market.token_decimals()),
            display_offset: market.display_offset(),
        }
    }

    /// Side of the order from its creator's perspective.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one side of the order is
    /// the native currency.
    pub fn side(&self, event: &RawEvent) -> Result<OrderSide> {
        match (event.token_give == self.ether, event.token_get == self.ether) {
            (true, false) => Ok(OrderSide::Buy),
            (false, true) => Ok(OrderSide::Sell),
            (true, true) => Err(ViewError::malformed(
                event.id,
                MalformedReason::CurrencyOnBothSides,
            )),
            (false, false) => Err(ViewError::malformed(event.id, MalformedReason::NoCurrencySide)),
        }
    }

    /// Decorate a single raw event.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MalformedOrder`] if:
    /// - Not exactly one side of the order is the native currency
    /// - Token amount is zero
    /// - Any amount or the price does not fit the decimal range
    /// - Timestamp can not be represented as a date
    pub fn decorate(&self, event: &RawEvent) -> Result<DecoratedOrder> {
        let malformed = |reason| ViewError::malformed(event.id, reason);

        let side = self.side(event)?;
        let (currency, token) = match side {
            OrderSide::Buy => (event.amount_give, event.amount_get),
            OrderSide::Sell => (event.amount_get, event.amount_give),
        };

        let ether_amount = self
            .currency_converter
            .from_unsigned(currency)
            .ok_or_else(|| malformed(MalformedReason::AmountOverflow))?;
        let token_amount = self
            .token_converter
            .from_unsigned(token)
            .ok_or_else(|| malformed(MalformedReason::AmountOverflow))?;
        if token_amount == UD128::ZERO {
            return Err(malformed(MalformedReason::ZeroTokenAmount));
        }
        let token_price = num::price(ether_amount, token_amount)
            .ok_or_else(|| malformed(MalformedReason::AmountOverflow))?;
        let formatted_timestamp = self
            .format_timestamp(event.timestamp)
            .ok_or_else(|| malformed(MalformedReason::TimestampOutOfRange))?;

        Ok(DecoratedOrder {
            event: event.clone(),
            side,
            ether_amount,
            token_amount,
            token_price,
            formatted_timestamp,
        })
    }

    /// Decorate events preserving their order, malformed ones are skipped.
    pub fn decorate_all<'a>(
        &self,
        events: impl IntoIterator<Item = &'a RawEvent>,
    ) -> Vec<DecoratedOrder> {
        events
            .into_iter()
            .filter_map(|event| match self.decorate(event) {
                Ok(order) => Some(order),
                Err(err) => {
                    warn!(%err, "Skipping malformed order");
                    None
                }
            })
            .collect()
    }

    fn format_timestamp(&self, timestamp: types::Timestamp) -> Option<String> {
        let at = DateTime::from_timestamp(i64::try_from(timestamp).ok()?, 0)?;
        Some(
            at.with_timezone(&self.display_offset)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        )
    }
}
