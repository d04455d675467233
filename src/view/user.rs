//! Views from the perspective of a particular account.
//!
//! A fill has two parties: the maker who created the order and the taker who
//! filled it. The maker sees the side of the order as is, while for the taker
//! it is inverted, so the taker of a maker's buy order sells.

use std::cmp::Reverse;

use alloy_primitives::Address;
use serde::Serialize;
use tracing::debug;

use super::{DecoratedOrder, Decorator};
use crate::types::{Color, OrderSide, RawEvent, Sign};

/// Decorated order classified from the account perspective.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTradeRecord {
    #[serde(flatten)]
    pub order: DecoratedOrder,

    /// Side of the trade for the account.
    pub order_type: OrderSide,

    /// Display color of the side.
    pub order_type_class: Color,

    /// Token balance change sign for the account.
    pub order_sign: Sign,
}

impl UserTradeRecord {
    fn new(order: DecoratedOrder, order_type: OrderSide) -> Self {
        Self {
            order,
            order_type,
            order_type_class: order_type.color(),
            order_sign: order_type.sign(),
        }
    }
}

/// Fills the account took part in, either as maker or as taker,
/// in ascending time order.
///
/// Empty if there is no account.
pub fn my_trades(
    decorator: &Decorator,
    filled: &[RawEvent],
    account: Option<Address>,
) -> Vec<UserTradeRecord> {
    let Some(account) = account else {
        return Vec::new();
    };

    let records: Vec<_> = decorator
        .decorate_all(super::ascending(
            filled.iter().filter(|fill| fill.involves(account)),
        ))
        .into_iter()
        .map(|order| {
            let order_type = if order.user() == account {
                order.side()
            } else {
                order.side().opposite()
            };
            UserTradeRecord::new(order, order_type)
        })
        .collect();

    debug!(%account, trades = records.len(), "Account trades built");
    records
}

/// Open orders created by the account, most recent first.
///
/// Empty if there is no account.
pub fn my_open_orders<'a>(
    decorator: &Decorator,
    open: impl IntoIterator<Item = &'a RawEvent>,
    account: Option<Address>,
) -> Vec<UserTradeRecord> {
    let Some(account) = account else {
        return Vec::new();
    };

    let mut records: Vec<_> = decorator
        .decorate_all(open.into_iter().filter(|order| order.user == account))
        .into_iter()
        .map(|order| {
            let order_type = order.side();
            UserTradeRecord::new(order, order_type)
        })
        .collect();
    records.sort_by_key(|record| Reverse(record.order.timestamp()));

    debug!(%account, orders = records.len(), "Account open orders built");
    records
}

#[cfg(test)]
mod tests {
    use fastnum::udec128;

    use super::*;
    use crate::{
        Market,
        testing::{self, ALICE, BOB, CAROL},
        view::book,
    };

    fn decorator() -> Decorator {
        Decorator::new(&Market::ethereum())
    }

    #[test]
    fn test_my_trades_perspective() {
        // Alice's buy order filled by Bob
        let order = testing::buy(1, ALICE, udec128!(2), udec128!(1), 100);
        let filled = vec![testing::fill(&order, BOB, 200)];

        let maker = my_trades(&decorator(), &filled, Some(ALICE));
        assert_eq!(maker.len(), 1);
        assert_eq!(maker[0].order_type, OrderSide::Buy);
        assert_eq!(maker[0].order_type_class, Color::Green);
        assert_eq!(maker[0].order_sign, Sign::Plus);

        let taker = my_trades(&decorator(), &filled, Some(BOB));
        assert_eq!(taker.len(), 1);
        assert_eq!(taker[0].order_type, OrderSide::Sell);
        assert_eq!(taker[0].order_type_class, Color::Red);
        assert_eq!(taker[0].order_sign, Sign::Minus);

        assert!(my_trades(&decorator(), &filled, Some(CAROL)).is_empty());
    }

    #[test]
    fn test_my_trades_complementary() {
        let filled = vec![
            testing::fill(&testing::buy(1, ALICE, udec128!(1), udec128!(2), 1), BOB, 10),
            testing::fill(&testing::sell(2, BOB, udec128!(2), udec128!(1), 2), ALICE, 20),
            testing::fill(&testing::sell(3, ALICE, udec128!(3), udec128!(1), 3), BOB, 30),
        ];

        let alice = my_trades(&decorator(), &filled, Some(ALICE));
        let bob = my_trades(&decorator(), &filled, Some(BOB));
        assert_eq!(alice.len(), 3);
        for (a, b) in alice.iter().zip(bob.iter()) {
            assert_eq!(a.order.id(), b.order.id());
            assert_eq!(a.order_type, b.order_type.opposite());
        }
    }

    #[test]
    fn test_my_trades_ascending() {
        let filled = vec![
            testing::fill(&testing::buy(1, ALICE, udec128!(1), udec128!(1), 1), BOB, 300),
            testing::fill(&testing::buy(2, CAROL, udec128!(1), udec128!(1), 2), ALICE, 100),
            testing::fill(&testing::buy(3, CAROL, udec128!(1), udec128!(1), 3), BOB, 200),
            testing::fill(&testing::buy(4, BOB, udec128!(1), udec128!(1), 4), ALICE, 200),
        ];
        let ids: Vec<_> = my_trades(&decorator(), &filled, Some(ALICE))
            .iter()
            .map(|r| r.order.id())
            .collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn test_my_trades_self_fill_is_maker() {
        let order = testing::sell(1, ALICE, udec128!(1), udec128!(1), 1);
        let filled = vec![testing::fill(&order, ALICE, 10)];
        let trades = my_trades(&decorator(), &filled, Some(ALICE));
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].order_type, OrderSide::Sell);
    }

    #[test]
    fn test_no_account() {
        let order = testing::buy(1, ALICE, udec128!(1), udec128!(1), 1);
        let filled = vec![testing::fill(&order, BOB, 10)];
        assert!(my_trades(&decorator(), &filled, None).is_empty());
        assert!(my_open_orders(&decorator(), &[order], None).is_empty());
    }

    #[test]
    fn test_my_open_orders() {
        let all = vec![
            testing::buy(1, ALICE, udec128!(1), udec128!(2), 100),
            testing::sell(2, ALICE, udec128!(1), udec128!(2), 300),
            testing::buy(3, BOB, udec128!(1), udec128!(2), 400),
            testing::sell(4, ALICE, udec128!(5), udec128!(1), 200),
            testing::buy(5, ALICE, udec128!(1), udec128!(1), 500),
        ];
        let filled = vec![testing::fill(&all[4], BOB, 600)];
        let open = book::open_orders(&all, &filled, &[]);

        let mine = my_open_orders(&decorator(), open, Some(ALICE));
        let summary: Vec<_> = mine.iter().map(|r| (r.order.id(), r.order_type)).collect();
        assert_eq!(
            summary,
            vec![(2, OrderSide::Sell), (4, OrderSide::Sell), (1, OrderSide::Buy)]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(my_trades(&decorator(), &[], Some(ALICE)).is_empty());
        assert!(my_open_orders(&decorator(), &[], Some(ALICE)).is_empty());
    }
}
