use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ProfitInfo, UnitProfit};

fn valid_purchase_price(purchase_price: Option<f64>) -> Option<f64> {
    match purchase_price {
        Some(p) if p.is_finite() && p > 0.0 => Some(p),
        Some(p) => {
            tracing::debug!(purchase_price = p, "ignoring non-positive purchase price");
            None
        }
        None => None,
    }
}

fn valid_current_price(current_price: f64) -> Option<f64> {
    (current_price.is_finite() && current_price >= 0.0).then_some(current_price)
}

/// Profit/loss for a position. `None` when the purchase price or quantity is unset
/// (or non-positive): there is nothing meaningful to compute yet.
pub fn calculate_profit(purchase_price: Option<f64>, current_price: f64, quantity: Option<f64>) -> Option<ProfitInfo> {
    let purchase_price = valid_purchase_price(purchase_price)?;
    let quantity = quantity.filter(|q| q.is_finite() && *q > 0.0)?;
    let current_price = valid_current_price(current_price)?;

    let total_purchase_amount = purchase_price * quantity;
    let total_current_amount = current_price * quantity;
    let total_profit_amount = total_current_amount - total_purchase_amount;
    let profit_percent = total_profit_amount / total_purchase_amount * 100.0;

    Some(ProfitInfo {
        purchase_price,
        current_price,
        quantity,
        total_purchase_amount,
        total_current_amount,
        total_profit_amount,
        profit_percent,
        is_profit: total_profit_amount >= 0.0,
    })
}

/// Per-share profit/loss. Never assumes a quantity.
pub fn calculate_unit_profit(purchase_price: Option<f64>, current_price: f64) -> Option<UnitProfit> {
    let purchase_price = valid_purchase_price(purchase_price)?;
    let current_price = valid_current_price(current_price)?;

    let profit = current_price - purchase_price;
    Some(UnitProfit {
        profit,
        profit_percent: profit / purchase_price * 100.0,
        is_profit: profit >= 0.0,
    })
}

/// Aggregate over every position that has profit data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub positions_counted: usize,
    pub total_purchase_amount: f64,
    pub total_current_amount: f64,
    pub total_profit_amount: f64,
    /// `None` when nothing was purchased or the ratio is not finite
    pub profit_percent: Option<f64>,
    pub is_profit: bool,
}

impl PortfolioTotals {
    pub fn from_profits<'a, I>(profits: I) -> Self
    where
        I: IntoIterator<Item = &'a ProfitInfo>,
    {
        let profits: Vec<&ProfitInfo> = profits.into_iter().collect();
        Self::sum_decimal(&profits).unwrap_or_else(|| {
            tracing::debug!(positions = profits.len(), "amounts exceed decimal range, summing as f64");
            Self::sum_f64(&profits)
        })
    }

    fn sum_decimal(profits: &[&ProfitInfo]) -> Option<Self> {
        let mut total_cost = Decimal::ZERO;
        let mut total_value = Decimal::ZERO;

        for info in profits {
            total_cost = total_cost.checked_add(Decimal::from_f64(info.total_purchase_amount)?)?;
            total_value = total_value.checked_add(Decimal::from_f64(info.total_current_amount)?)?;
        }

        let total_pnl = total_value.checked_sub(total_cost)?;
        let profit_percent = if total_cost > Decimal::ZERO {
            total_pnl
                .checked_div(total_cost)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .and_then(|pct| pct.to_f64())
                .or_else(|| percent_f64(total_pnl.to_f64()?, total_cost.to_f64()?))
        } else {
            None
        };

        Some(Self {
            positions_counted: profits.len(),
            total_purchase_amount: total_cost.to_f64()?,
            total_current_amount: total_value.to_f64()?,
            total_profit_amount: total_pnl.to_f64()?,
            profit_percent,
            is_profit: total_pnl >= Decimal::ZERO,
        })
    }

    fn sum_f64(profits: &[&ProfitInfo]) -> Self {
        let total_cost: f64 = profits.iter().map(|p| p.total_purchase_amount).sum();
        let total_value: f64 = profits.iter().map(|p| p.total_current_amount).sum();
        let total_pnl = total_value - total_cost;

        Self {
            positions_counted: profits.len(),
            total_purchase_amount: total_cost,
            total_current_amount: total_value,
            total_profit_amount: total_pnl,
            profit_percent: if total_cost > 0.0 { percent_f64(total_pnl, total_cost) } else { None },
            is_profit: total_pnl >= 0.0,
        }
    }
}

fn percent_f64(pnl: f64, cost: f64) -> Option<f64> {
    let pct = pnl / cost * 100.0;
    pct.is_finite().then_some(pct)
}
