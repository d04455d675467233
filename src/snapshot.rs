//! Input state snapshot.
//!
//! Mirrors the application store the views are derived from. Every path is
//! optional: missing loaded flags read as `false`, missing collections as empty
//! and missing references as absent, since missing data means it is not
//! loaded yet.
//!
//! Collections are shared by [`Arc`], so their identity can be used by
//! [`crate::selector::Selectors`] to skip recomputation of unchanged views.

use std::sync::Arc;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::types::RawEvent;

/// Loadable collection of raw events.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Collection {
    loaded: bool,
    data: Arc<[RawEvent]>,
}

impl Collection {
    /// Loaded collection of the events.
    pub fn loaded(data: impl Into<Arc<[RawEvent]>>) -> Self {
        Self {
            loaded: true,
            data: data.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn data(&self) -> &Arc<[RawEvent]> {
        &self.data
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct Web3State {
    account: Option<Address>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct TokenState {
    loaded: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ExchangeState {
    loaded: bool,
    contract: Option<Address>,
    all_orders: Collection,
    cancelled_orders: Collection,
    filled_orders: Collection,
}

/// Snapshot of the application state.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    web3: Web3State,
    token: TokenState,
    exchange: ExchangeState,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the snapshot from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_account(mut self, account: Option<Address>) -> Self {
        self.web3.account = account;
        self
    }

    pub fn with_token_loaded(mut self, loaded: bool) -> Self {
        self.token.loaded = loaded;
        self
    }

    pub fn with_exchange(mut self, contract: Option<Address>, loaded: bool) -> Self {
        self.exchange.contract = contract;
        self.exchange.loaded = loaded;
        self
    }

    pub fn with_all_orders(mut self, orders: Collection) -> Self {
        self.exchange.all_orders = orders;
        self
    }

    pub fn with_cancelled_orders(mut self, orders: Collection) -> Self {
        self.exchange.cancelled_orders = orders;
        self
    }

    pub fn with_filled_orders(mut self, orders: Collection) -> Self {
        self.exchange.filled_orders = orders;
        self
    }

    /// Connected account, if any.
    pub fn account(&self) -> Option<Address> {
        self.web3.account
    }

    pub fn token_loaded(&self) -> bool {
        self.token.loaded
    }

    pub fn exchange_loaded(&self) -> bool {
        self.exchange.loaded
    }

    /// Both token and exchange contracts are loaded.
    pub fn contracts_loaded(&self) -> bool {
        self.token_loaded() && self.exchange_loaded()
    }

    /// Address of the exchange contract, if loaded.
    pub fn exchange_contract(&self) -> Option<Address> {
        self.exchange.contract
    }

    /// All orders ever placed.
    pub fn all_orders(&self) -> &Arc<[RawEvent]> {
        self.exchange.all_orders.data()
    }

    pub fn all_orders_loaded(&self) -> bool {
        self.exchange.all_orders.is_loaded()
    }

    pub fn cancelled_orders(&self) -> &Arc<[RawEvent]> {
        self.exchange.cancelled_orders.data()
    }

    pub fn cancelled_orders_loaded(&self) -> bool {
        self.exchange.cancelled_orders.is_loaded()
    }

    pub fn filled_orders(&self) -> &Arc<[RawEvent]> {
        self.exchange.filled_orders.data()
    }

    /// Also tells whether the trade history, account trades and the price chart
    /// are ready to show.
    pub fn filled_orders_loaded(&self) -> bool {
        self.exchange.filled_orders.is_loaded()
    }

    /// All order collections are loaded, so the order book and account open
    /// orders are ready to show.
    pub fn order_book_loaded(&self) -> bool {
        self.all_orders_loaded() && self.cancelled_orders_loaded() && self.filled_orders_loaded()
    }
}

#[cfg(test)]
mod tests {
    use fastnum::udec128;

    use super::*;
    use crate::testing::{self, ALICE};

    #[test]
    fn test_empty_snapshot_defaults() {
        let snapshot = Snapshot::from_json("{}").unwrap();

        assert_eq!(snapshot.account(), None);
        assert!(!snapshot.token_loaded());
        assert!(!snapshot.exchange_loaded());
        assert!(!snapshot.contracts_loaded());
        assert_eq!(snapshot.exchange_contract(), None);
        assert!(snapshot.all_orders().is_empty());
        assert!(snapshot.cancelled_orders().is_empty());
        assert!(snapshot.filled_orders().is_empty());
        assert!(!snapshot.order_book_loaded());
        assert!(!snapshot.filled_orders_loaded());
    }

    #[test]
    fn test_partial_snapshot_defaults() {
        let snapshot = Snapshot::from_json(
            r#"{
                "token": { "loaded": true },
                "exchange": {
                    "loaded": true,
                    "filledOrders": { "loaded": true },
                    "allOrders": { "data": [] }
                }
            }"#,
        )
        .unwrap();

        assert!(snapshot.contracts_loaded());
        assert!(snapshot.filled_orders_loaded());
        assert!(!snapshot.all_orders_loaded());
        assert!(!snapshot.order_book_loaded());
        assert!(snapshot.filled_orders().is_empty());
    }

    #[test]
    fn test_builder() {
        let orders = vec![testing::buy(1, ALICE, udec128!(1), udec128!(1), 1)];
        let snapshot = Snapshot::new()
            .with_account(Some(ALICE))
            .with_token_loaded(true)
            .with_exchange(Some(testing::TOKEN), true)
            .with_all_orders(Collection::loaded(orders))
            .with_cancelled_orders(Collection::loaded(vec![]))
            .with_filled_orders(Collection::loaded(vec![]));

        assert_eq!(snapshot.account(), Some(ALICE));
        assert!(snapshot.contracts_loaded());
        assert!(snapshot.order_book_loaded());
        assert_eq!(snapshot.all_orders().len(), 1);
    }
}
