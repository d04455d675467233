use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::{OrderId, Timestamp};

/// Exchange event as received from the ledger.
///
/// The same shape is used for placed orders, cancellations and fills,
/// only fills carry [`RawEvent::user_fill`].
///
/// Amounts are integers in the smallest units of the corresponding token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// ID of the order.
    pub id: OrderId,

    /// Address that created the order.
    pub user: Address,

    /// Address that filled the order, fills only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_fill: Option<Address>,

    /// Token the order creator wants to get.
    pub token_get: Address,

    /// Amount of [`RawEvent::token_get`] the order creator wants to get.
    pub amount_get: U256,

    /// Token the order creator gives.
    pub token_give: Address,

    /// Amount of [`RawEvent::token_give`] the order creator gives.
    pub amount_give: U256,

    /// Event time.
    pub timestamp: Timestamp,
}

impl RawEvent {
    /// Whether the account is either the maker or the taker of the event.
    pub fn involves(&self, account: Address) -> bool {
        self.user == account || self.user_fill == Some(account)
    }
}
