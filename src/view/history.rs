//! Global trade history.

use std::cmp::Reverse;

use tracing::debug;

use super::{Decorator, TradeRecord, colorize};
use crate::types::RawEvent;

/// Build the colorized trade history, most recent trade first.
///
/// Price directions are assigned in ascending time order, so every trade is
/// compared with the one that happened right before it.
pub fn build(decorator: &Decorator, filled: &[RawEvent]) -> Vec<TradeRecord> {
    let mut records = colorize(decorator.decorate_all(super::ascending(filled)));
    records.sort_by_key(|record| Reverse(record.order.timestamp()));

    debug!(trades = records.len(), "Trade history built");
    records
}
