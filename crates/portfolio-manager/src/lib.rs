//! Position profit/loss calculation and display formatting.

pub mod format;
pub mod models;
pub mod profit;

pub use format::{format_currency, format_percent, format_profit, format_signed_currency, parse_percent, Currency};
pub use models::{Holding, ProfitInfo, UnitProfit};
pub use profit::{calculate_profit, calculate_unit_profit, PortfolioTotals};
