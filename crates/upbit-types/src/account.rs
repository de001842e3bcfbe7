//! Account balances and order availability

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Market;

/// Balance of one currency held in the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Currency code (e.g., "KRW", "BTC")
    pub currency: String,
    /// Available balance
    pub balance: Decimal,
    /// Balance locked in open orders
    pub locked: Decimal,
    /// Average buy price
    pub avg_buy_price: Decimal,
    /// Whether the average buy price was edited by the user
    pub avg_buy_price_modified: bool,
    /// Currency the average buy price is quoted in
    pub unit_currency: String,
}

impl Account {
    /// Available plus locked balance
    pub fn total(&self) -> Decimal {
        self.balance + self.locked
    }

    /// Total balance valued at the average buy price
    pub fn cost_basis(&self) -> Decimal {
        self.total() * self.avg_buy_price
    }
}

/// Fees and balances relevant to ordering on one market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderChance {
    /// Taker fee rate when buying
    pub bid_fee: Decimal,
    /// Taker fee rate when selling
    pub ask_fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_bid_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_ask_fee: Option<Decimal>,
    pub market: MarketInfo,
    /// Quote currency balance (spent when buying)
    pub bid_account: Account,
    /// Base currency balance (spent when selling)
    pub ask_account: Account,
}

/// Market section of [`OrderChance`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub id: Market,
    pub name: String,
    #[serde(default)]
    pub order_types: Vec<String>,
    #[serde(default)]
    pub order_sides: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total: Option<Decimal>,
    pub state: String,
}
