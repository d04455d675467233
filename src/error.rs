use crate::types;

/// Reason a raw event can not be decorated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("token amount is zero, price is undefined")]
    ZeroTokenAmount,

    #[error("neither side trades the native currency")]
    NoCurrencySide,

    #[error("both sides trade the native currency")]
    CurrencyOnBothSides,

    #[error("amount does not fit decimal range")]
    AmountOverflow,

    #[error("timestamp out of range")]
    TimestampOutOfRange,
}

/// Error returned while deriving views from raw events.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("malformed order {id}: {reason}")]
    MalformedOrder {
        id: types::OrderId,
        reason: MalformedReason,
    },
}

impl ViewError {
    pub(crate) fn malformed(id: types::OrderId, reason: MalformedReason) -> Self {
        Self::MalformedOrder { id, reason }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
