//! Configuration for the snapshot viewer.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): market settings
//! - CLI arguments: snapshot location and presentation

use std::path::PathBuf;

use alloy_primitives::{Address, hex::FromHexError};
use chrono::FixedOffset;
use clap::{Parser, ValueEnum};
use dex_views::{Market, view::CandleInterval};

/// Prefix of the environment variables.
const ENV_PREFIX: &str = "DEX_VIEWS_";

/// Environment configuration (market settings).
///
/// Every value is optional and falls back to [`Market::ethereum`].
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// Token address standing for the native currency
    pub ether_address: Option<String>,

    /// Decimals of the native currency (default: 18)
    pub currency_decimals: Option<u8>,

    /// Decimals of the token (default: 18)
    pub token_decimals: Option<u8>,

    /// Offset of displayed times from UTC, in minutes (default: 0)
    pub utc_offset_minutes: Option<i32>,
}

impl EnvConfig {
    /// Load configuration from `DEX_VIEWS_*` environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Market the views are derived for.
    pub fn to_market(&self) -> Result<Market, ConfigError> {
        let default = Market::ethereum();

        let ether = match &self.ether_address {
            Some(address) => address.parse().map_err(ConfigError::InvalidEtherAddress)?,
            None => default.ether(),
        };

        let display_offset = match self.utc_offset_minutes {
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or(ConfigError::InvalidUtcOffset(minutes))?,
            None => default.display_offset(),
        };

        Ok(Market::custom(
            ether,
            self.currency_decimals.unwrap_or(default.currency_decimals()),
            self.token_decimals.unwrap_or(default.token_decimals()),
            display_offset,
        ))
    }
}

/// Views to show.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ViewKind {
    /// Open orders by side
    Book,
    /// Trade history
    Trades,
    /// Trades and open orders of the account
    Mine,
    /// Price chart
    Chart,
    /// Everything above
    #[default]
    All,
}

impl ViewKind {
    pub fn includes(&self, other: ViewKind) -> bool {
        *self == ViewKind::All || *self == other
    }
}

/// CLI arguments of the snapshot viewer.
#[derive(Debug, Parser)]
#[command(name = "view_snapshot")]
#[command(about = "Print trading views derived from an exchange state snapshot")]
pub struct CliConfig {
    /// JSON file with the exchange state snapshot
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Account to show own trades and orders for, overrides the snapshot one
    #[arg(short, long)]
    pub account: Option<String>,

    /// Views to show
    #[arg(long, value_enum, default_value = "all")]
    pub view: ViewKind,

    /// Price chart interval: 1m, 5m, 15m, 1h, 2h, 4h, 1d or 1w
    #[arg(short, long, default_value = "1h")]
    pub interval: CandleInterval,

    /// Number of rows to display per table (0 = all)
    #[arg(short, long, default_value = "10")]
    pub depth: usize,

    /// Print views as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl CliConfig {
    /// Parse the account override.
    pub fn account(&self) -> Result<Option<Address>, ConfigError> {
        self.account
            .as_deref()
            .map(|account| account.parse().map_err(ConfigError::InvalidAccount))
            .transpose()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ether address: {0}")]
    InvalidEtherAddress(FromHexError),

    #[error("Invalid account address: {0}")]
    InvalidAccount(FromHexError),

    #[error("UTC offset out of range: {0} minutes")]
    InvalidUtcOffset(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(account: Option<&str>) -> CliConfig {
        CliConfig {
            snapshot: PathBuf::from("snapshot.json"),
            account: account.map(str::to_string),
            view: ViewKind::All,
            interval: CandleInterval::Hour1,
            depth: 10,
            json: false,
        }
    }

    #[test]
    fn test_default_market() {
        let market = EnvConfig::default().to_market().unwrap();
        assert_eq!(market.ether(), Address::ZERO);
        assert_eq!(market.currency_decimals(), 18);
        assert_eq!(market.token_decimals(), 18);
        assert_eq!(market.display_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_custom_market() {
        let env = EnvConfig {
            ether_address: Some("0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string()),
            currency_decimals: Some(18),
            token_decimals: Some(6),
            utc_offset_minutes: Some(-90),
        };
        let market = env.to_market().unwrap();
        assert_eq!(
            market.ether(),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse::<Address>().unwrap()
        );
        assert_eq!(market.token_decimals(), 6);
        assert_eq!(market.display_offset().local_minus_utc(), -5400);
    }

    #[test]
    fn test_invalid_market() {
        let env = EnvConfig {
            ether_address: Some("0xnot-an-address".to_string()),
            ..Default::default()
        };
        assert!(matches!(env.to_market(), Err(ConfigError::InvalidEtherAddress(_))));

        let env = EnvConfig {
            utc_offset_minutes: Some(24 * 60),
            ..Default::default()
        };
        assert!(matches!(env.to_market(), Err(ConfigError::InvalidUtcOffset(1440))));
    }

    #[test]
    fn test_account_override() {
        assert_eq!(cli(None).account().unwrap(), None);
        assert!(cli(Some("0x70997970c51812dc3a010c7d01b50e0d17dc79c8"))
            .account()
            .unwrap()
            .is_some());
        assert!(matches!(
            cli(Some("alice")).account(),
            Err(ConfigError::InvalidAccount(_))
        ));
    }

    #[test]
    fn test_view_kind_includes() {
        assert!(ViewKind::All.includes(ViewKind::Book));
        assert!(ViewKind::Chart.includes(ViewKind::Chart));
        assert!(!ViewKind::Chart.includes(ViewKind::Book));
    }
}
