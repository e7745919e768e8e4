use serde::{Deserialize, Serialize};

use crate::profit::{calculate_profit, calculate_unit_profit};

/// A registered ticker with the user's optional purchase details.
/// Newly added tickers usually have neither field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl Holding {
    pub fn profit(&self, current_price: f64) -> Option<ProfitInfo> {
        calculate_profit(self.purchase_price, current_price, self.quantity)
    }

    pub fn unit_profit(&self, current_price: f64) -> Option<UnitProfit> {
        calculate_unit_profit(self.purchase_price, current_price)
    }
}

/// Unrealized profit/loss for a held quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitInfo {
    pub purchase_price: f64,
    pub current_price: f64,
    pub quantity: f64,
    pub total_purchase_amount: f64,
    pub total_current_amount: f64,
    pub total_profit_amount: f64,
    pub profit_percent: f64,
    /// Break-even counts as profit
    pub is_profit: bool,
}

/// Per-share profit/loss when no quantity is known
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitProfit {
    pub profit: f64,
    pub profit_percent: f64,
    pub is_profit: bool,
}
