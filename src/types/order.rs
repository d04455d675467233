use serde::Serialize;

/// Side of the order.
///
/// An order giving the native currency for tokens is a buy,
/// an order giving tokens for the native currency is a sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Side of the counter-action, the one filling an order of this side.
    pub fn opposite(&self) -> Self {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }

    /// Display color of the side.
    pub fn color(&self) -> Color {
        match self {
            OrderSide::Buy => Color::Green,
            OrderSide::Sell => Color::Red,
        }
    }

    /// Balance change sign of the side, tokens are received on buy.
    pub fn sign(&self) -> Sign {
        match self {
            OrderSide::Buy => Sign::Plus,
            OrderSide::Sell => Sign::Minus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display color, serialized as the presentation class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    #[serde(rename = "success")]
    Green,
    #[serde(rename = "danger")]
    Red,
}

impl Color {
    /// Presentation class name.
    pub fn class(&self) -> &'static str {
        match self {
            Color::Green => "success",
            Color::Red => "danger",
        }
    }
}

/// Price movement relative to the previous trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Up,
    Down,
}

impl PriceDirection {
    pub fn color(&self) -> Color {
        match self {
            PriceDirection::Up => Color::Green,
            PriceDirection::Down => Color::Red,
        }
    }
}

/// Sign of a change: balance change of a trade or last price change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Sign {
    pub fn as_char(&self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
