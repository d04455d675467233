//! Token exchange trading views.
//!
//! # Overview
//!
//! Pure derivation of display-ready views from the raw ledger of exchange
//! events: placed orders, cancellations and fills.
//!
//! Use [`view::Decorator`] built for a [`Market`] to derive:
//!
//! * the open order book, see [`view::book`];
//! * the colorized trade history, see [`view::history`];
//! * account-scoped trades and open orders, see [`view::user`];
//! * the OHLC price chart, see [`view::chart`].
//!
//! Every builder is a pure function of its inputs. Input slices are never
//! reordered in place and every call allocates fresh output, so results can be
//! cached by input identity, which is what [`selector::Selectors`] does on top
//! of a [`snapshot::Snapshot`].
//!
//! # Malformed events
//!
//! Events without a computable price (zero token amount, no side trading the
//! native currency, etc.) are rejected by [`view::Decorator::decorate`] with
//! [`error::ViewError::MalformedOrder`] and skipped by all builders.
//!
//! # Testing
//!
//! [`testing`] module provides event fixtures for unit and integration tests.

pub mod error;
pub mod num;
pub mod selector;
pub mod snapshot;
pub mod testing;
pub mod types;
pub mod view;

use alloy_primitives::Address;
use chrono::{FixedOffset, Offset, Utc};

/// Default number of decimals of the native currency and of ERC20 tokens.
const DEFAULT_DECIMALS: u8 = 18;

#[derive(Clone, Debug)]
/// Market the views are derived for.
pub struct Market {
    ether: Address,
    currency_decimals: u8,
    token_decimals: u8,
    display_offset: FixedOffset,
}

impl Market {
    /// Ether traded against an 18-decimals token, with zero address standing
    /// for ether and timestamps displayed in UTC.
    pub fn ethereum() -> Self {
        Self {
            ether: Address::ZERO,
            currency_decimals: DEFAULT_DECIMALS,
            token_decimals: DEFAULT_DECIMALS,
            display_offset: Utc.fix(),
        }
    }

    pub fn custom(
        ether: Address,
        currency_decimals: u8,
        token_decimals: u8,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            ether,
            currency_decimals,
            token_decimals,
            display_offset,
        }
    }

    /// Sentinel token address representing the native currency.
    pub fn ether(&self) -> Address {
        self.ether
    }

    pub fn currency_decimals(&self) -> u8 {
        self.currency_decimals
    }

    pub fn token_decimals(&self) -> u8 {
        self.token_decimals
    }

    /// Offset formatted timestamps are rendered in.
    pub fn display_offset(&self) -> FixedOffset {
        self.display_offset
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::ethereum()
    }
}
