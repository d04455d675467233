use alloy_primitives::U256;
use fastnum::{
    UD128, bint,
    decimal::{Context, RoundingMode, UnsignedDecimal},
    udec128,
};

/// Number of decimal places token prices are rounded to.
pub const PRICE_DECIMALS: i16 = 5;

/// Smallest-unit integer to decimal converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    decimals: i32,
}

impl Converter {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals: decimals as i32,
        }
    }

    /// Scales the integer amount down by the configured decimals,
    /// `None` if the amount does not fit the decimal of `N` words.
    pub fn from_unsigned<const N: usize>(&self, value: U256) -> Option<UnsignedDecimal<N>> {
        let unscaled = bint::UInt::<N>::from_le_slice(value.as_le_slice())?;
        Some(UnsignedDecimal::<N>::from_parts(
            unscaled,
            -self.decimals,
            Context::default().with_rounding_mode(RoundingMode::HalfUp),
        ))
    }

    pub fn to_unsigned<const N: usize>(&self, value: UnsignedDecimal<N>) -> U256 {
        let rescaled = value.rescale(self.decimals as i16);
        U256::from_le_slice(rescaled.digits().to_radix_le(256).as_slice())
    }
}

/// Prices from this bound up can not keep [`PRICE_DECIMALS`] fractional
/// digits in a [`UD128`].
pub const MAX_PRICE: UD128 = udec128!(1000000000000000000000000000000000);

/// Currency per token price rounded half-up to [`PRICE_DECIMALS`] places.
/// `None` if the token amount is zero or the price is not below [`MAX_PRICE`].
pub fn price(currency: UD128, token: UD128) -> Option<UD128> {
    if token == UD128::ZERO {
        return None;
    }
    let quotient = currency / token;
    (quotient < MAX_PRICE).then(|| quotient.rescale(PRICE_DECIMALS))
}
