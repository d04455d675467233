//! Table and JSON output of the views.

use alloy_primitives::Address;
use chrono::DateTime;
use dex_views::{
    selector::Views,
    types::{PriceDirection, Timestamp},
    view::{OrderBook, OrderBookEntry, PriceChart, TradeRecord, UserTradeRecord},
};
use serde::Serialize;

use crate::config::ViewKind;

const WIDTH: usize = 90;

/// Account views serialized together.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountViews<'a> {
    my_trades: &'a [UserTradeRecord],
    my_open_orders: &'a [UserTradeRecord],
}

/// Selected views as pretty JSON.
pub fn json(views: &Views, kind: ViewKind) -> serde_json::Result<String> {
    match kind {
        ViewKind::All => serde_json::to_string_pretty(views),
        ViewKind::Book => serde_json::to_string_pretty(&*views.order_book),
        ViewKind::Trades => serde_json::to_string_pretty(&*views.trade_history),
        ViewKind::Mine => serde_json::to_string_pretty(&AccountViews {
            my_trades: &views.my_trades,
            my_open_orders: &views.my_open_orders,
        }),
        ViewKind::Chart => serde_json::to_string_pretty(&*views.price_chart),
    }
}

/// Print selected views as tables.
pub fn tables(
    views: &Views,
    kind: ViewKind,
    depth: usize,
    account: Option<Address>,
) {
    if kind.includes(ViewKind::Book) {
        print_book(&views.order_book, depth);
    }
    if kind.includes(ViewKind::Trades) {
        print_trades(&views.trade_history, depth);
    }
    if kind.includes(ViewKind::Mine) {
        print_account(&views.my_trades, &views.my_open_orders, depth, account);
    }
    if kind.includes(ViewKind::Chart) {
        print_chart(&views.price_chart, depth);
    }
}

fn limit(len: usize, depth: usize) -> usize {
    if depth == 0 { len } else { depth.min(len) }
}

fn direction_symbol(direction: PriceDirection) -> &'static str {
    match direction {
        PriceDirection::Up => "▲",
        PriceDirection::Down => "▼",
    }
}

fn format_time(time: Timestamp) -> String {
    i64::try_from(time)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| time.to_string())
}

fn print_book_header() {
    println!("{:-^WIDTH$}", "");
    println!(
        "{:>8} │ {:>18} │ {:>22} │ {:>22} │ {:<6}",
        "Order", "Price", "Tokens", "Ether", "Fill"
    );
    println!("{:-^WIDTH$}", "");
}

fn print_book_entry(entry: &OrderBookEntry) {
    println!(
        "{:>8} │ {:>18} │ {:>22} │ {:>22} │ {:<6}",
        entry.order.id(),
        format!("{}", entry.price()),
        format!("{}", entry.order.token_amount()),
        format!("{}", entry.order.ether_amount()),
        entry.order_fill_class,
    );
}

fn print_book(book: &OrderBook, depth: usize) {
    println!("\n{:=^WIDTH$}", " ORDER BOOK ");

    // Asks reversed so the lowest ask is closest to the spread
    println!("{:^WIDTH$}", "SELL");
    print_book_header();
    let asks = &book.sell()[..limit(book.sell().len(), depth)];
    for entry in asks.iter().rev() {
        print_book_entry(entry);
    }

    match (book.spread(), book.best_bid(), book.best_ask()) {
        (Some(spread), _, _) => println!("{:=^WIDTH$}", format!(" SPREAD: {} ", spread)),
        (None, Some(bid), Some(ask)) => {
            println!("{:=^WIDTH$}", format!(" CROSSED: bid {} > ask {} ", bid, ask))
        }
        _ => println!("{:=^WIDTH$}", " SPREAD: N/A "),
    }

    println!("{:^WIDTH$}", "BUY");
    print_book_header();
    for entry in &book.buy()[..limit(book.buy().len(), depth)] {
        print_book_entry(entry);
    }

    println!(
        "\nOpen orders: {} buy, {} sell",
        book.buy().len(),
        book.sell().len()
    );
}

fn print_trades(trades: &[TradeRecord], depth: usize) {
    println!("\n{:=^WIDTH$}", " TRADES ");
    println!(
        "{:<22} │ {:>8} │ {:>20} │ {:>24}",
        "Time", "Order", "Price", "Tokens"
    );
    println!("{:-^WIDTH$}", "");

    for trade in &trades[..limit(trades.len(), depth)] {
        println!(
            "{:<22} │ {:>8} │ {:>18} {} │ {:>24}",
            trade.order.formatted_timestamp(),
            trade.order.id(),
            format!("{}", trade.order.token_price()),
            direction_symbol(trade.price_direction),
            format!("{}", trade.order.token_amount()),
        );
    }

    if trades.is_empty() {
        println!("{:^WIDTH$}", "No trades");
    }
}

fn print_user_record(record: &UserTradeRecord) {
    println!(
        "{:<22} │ {:>8} │ {:<4} │ {:>18} │ {}{:>22}",
        record.order.formatted_timestamp(),
        record.order.id(),
        record.order_type,
        format!("{}", record.order.token_price()),
        record.order_sign,
        format!("{}", record.order.token_amount()),
    );
}

fn print_account(
    trades: &[UserTradeRecord],
    open: &[UserTradeRecord],
    depth: usize,
    account: Option<Address>,
) {
    println!("\n{:=^WIDTH$}", " MY TRANSACTIONS ");
    let Some(account) = account else {
        println!("{:^WIDTH$}", "No account");
        return;
    };
    println!("Account: {}", account);

    for (title, records) in [("TRADES", trades), ("OPEN ORDERS", open)] {
        println!("\n{:^WIDTH$}", title);
        println!(
            "{:<22} │ {:>8} │ {:<4} │ {:>18} │ {:>23}",
            "Time", "Order", "Side", "Price", "Tokens"
        );
        println!("{:-^WIDTH$}", "");
        for record in &records[..limit(records.len(), depth)] {
            print_user_record(record);
        }
    }
}

fn print_chart(chart: &PriceChart, depth: usize) {
    println!("\n{:=^WIDTH$}", format!(" PRICE CHART ({}) ", chart.interval));
    println!(
        "Last price: {} {}",
        chart.last_price,
        chart.last_price_change
    );
    println!("{:-^WIDTH$}", "");
    println!(
        "{:<22} │ {:>14} │ {:>14} │ {:>14} │ {:>14}",
        "Open time", "Open", "High", "Low", "Close"
    );
    println!("{:-^WIDTH$}", "");

    // Most recent points
    let skip = chart.points.len() - limit(chart.points.len(), depth);
    for point in &chart.points[skip..] {
        println!(
            "{:<22} │ {:>14} │ {:>14} │ {:>14} │ {:>14}",
            format_time(point.time),
            format!("{}", point.open),
            format!("{}", point.high),
            format!("{}", point.low),
            format!("{}", point.close),
        );
    }
}
