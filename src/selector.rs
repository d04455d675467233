//! Memoized view selectors.
//!
//! Views are pure functions of the snapshot collections (and the account for
//! account-scoped ones), so each view is cached along with the [`Arc`]s of the
//! collections it was built from and rebuilt only when one of them was
//! replaced. Collections are compared by identity, not by content.
//!
//! A single [`Selectors`] can be shared between threads, each cache slot is
//! guarded by its own lock.

use std::sync::{Arc, Mutex, PoisonError};

use alloy_primitives::Address;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    Market,
    snapshot::Snapshot,
    types::RawEvent,
    view::{
        CandleInterval, Decorator, OrderBook, PriceChart, TradeRecord, UserTradeRecord,
        book, chart, history, user,
    },
};

/// Inputs a cached view was built from.
struct InputKey {
    collections: Vec<Arc<[RawEvent]>>,
    account: Option<Address>,
}

impl InputKey {
    fn new(collections: &[&Arc<[RawEvent]>], account: Option<Address>) -> Self {
        Self {
            collections: collections.iter().map(|c| Arc::clone(c)).collect(),
            account,
        }
    }

    fn matches(&self, other: &InputKey) -> bool {
        self.account == other.account
            && self.collections.len() == other.collections.len()
            && self
                .collections
                .iter()
                .zip(other.collections.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

/// Single-entry cache of a view.
struct Memo<V> {
    name: &'static str,
    slot: Mutex<Option<(InputKey, Arc<V>)>>,
}

impl<V> Memo<V> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    fn get_or_compute(&self, key: InputKey, compute: impl FnOnce() -> V) -> Arc<V> {
        // Slot is always replaced as a whole, so a poisoned value is still consistent
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached, value)) = slot.as_ref() {
            if cached.matches(&key) {
                trace!(view = self.name, "Cached view reused");
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute());
        debug!(view = self.name, "View recomputed");
        *slot = Some((key, Arc::clone(&value)));
        value
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// All views of a snapshot.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Views {
    pub order_book: Arc<OrderBook>,
    pub trade_history: Arc<Vec<TradeRecord>>,
    pub my_trades: Arc<Vec<UserTradeRecord>>,
    pub my_open_orders: Arc<Vec<UserTradeRecord>>,
    pub price_chart: Arc<PriceChart>,
}

/// Memoized views of a [`Market`].
pub struct Selectors {
    decorator: Decorator,
    interval: CandleInterval,
    order_book: Memo<OrderBook>,
    trade_history: Memo<Vec<TradeRecord>>,
    my_trades: Memo<Vec<UserTradeRecord>>,
    my_open_orders: Memo<Vec<UserTradeRecord>>,
    price_chart: Memo<PriceChart>,
}

impl Selectors {
    /// Creates selectors with hourly price chart.
    pub fn new(market: &Market) -> Self {
        Self {
            decorator: Decorator::new(market),
            interval: CandleInterval::default(),
            order_book: Memo::new("order_book"),
            trade_history: Memo::new("trade_history"),
            my_trades: Memo::new("my_trades"),
            my_open_orders: Memo::new("my_open_orders"),
            price_chart: Memo::new("price_chart"),
        }
    }

    /// Use the given price chart interval.
    pub fn with_interval(mut self, interval: CandleInterval) -> Self {
        self.interval = interval;
        self.price_chart.clear();
        self
    }

    pub fn decorator(&self) -> &Decorator {
        &self.decorator
    }

    pub fn interval(&self) -> CandleInterval {
        self.interval
    }

    pub fn order_book(&self, snapshot: &Snapshot) -> Arc<OrderBook> {
        let (all, filled, cancelled) = Self::order_sets(snapshot);
        self.order_book
            .get_or_compute(InputKey::new(&[all, filled, cancelled], None), || {
                book::build(&self.decorator, all, filled, cancelled)
            })
    }

    pub fn trade_history(&self, snapshot: &Snapshot) -> Arc<Vec<TradeRecord>> {
        let filled = snapshot.filled_orders();
        self.trade_history
            .get_or_compute(InputKey::new(&[filled], None), || {
                history::build(&self.decorator, filled)
            })
    }

    pub fn my_trades(&self, snapshot: &Snapshot) -> Arc<Vec<UserTradeRecord>> {
        let filled = snapshot.filled_orders();
        let account = snapshot.account();
        self.my_trades
            .get_or_compute(InputKey::new(&[filled], account), || {
                user::my_trades(&self.decorator, filled, account)
            })
    }

    pub fn my_open_orders(&self, snapshot: &Snapshot) -> Arc<Vec<UserTradeRecord>> {
        let (all, filled, cancelled) = Self::order_sets(snapshot);
        let account = snapshot.account();
        self.my_open_orders
            .get_or_compute(InputKey::new(&[all, filled, cancelled], account), || {
                user::my_open_orders(
                    &self.decorator,
                    book::open_orders(all, filled, cancelled),
                    account,
                )
            })
    }

    pub fn price_chart(&self, snapshot: &Snapshot) -> Arc<PriceChart> {
        let filled = snapshot.filled_orders();
        self.price_chart
            .get_or_compute(InputKey::new(&[filled], None), || {
                chart::build_with_interval(&self.decorator, filled, self.interval)
            })
    }

    /// All views of the snapshot.
    pub fn views(&self, snapshot: &Snapshot) -> Views {
        Views {
            order_book: self.order_book(snapshot),
            trade_history: self.trade_history(snapshot),
            my_trades: self.my_trades(snapshot),
            my_open_orders: self.my_open_orders(snapshot),
            price_chart: self.price_chart(snapshot),
        }
    }

    fn order_sets(snapshot: &Snapshot) -> (&Arc<[RawEvent]>, &Arc<[RawEvent]>, &Arc<[RawEvent]>) {
        (
            snapshot.all_orders(),
            snapshot.filled_orders(),
            snapshot.cancelled_orders(),
        )
    }
}
