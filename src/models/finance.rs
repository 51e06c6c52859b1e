use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed-out figures for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: String,
    pub event: String,
    pub client: String,
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}

impl FinancialRecord {
    /// Profit as a percentage of revenue; 0.0 when there was no revenue.
    pub fn margin_percent(&self) -> f64 {
        if self.revenue.is_zero() {
            return 0.0;
        }
        (self.profit / self.revenue * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }
}

/// Summed revenue, expenses and profit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinancialTotals {
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}

impl FinancialTotals {
    pub fn add(&mut self, record: &FinancialRecord) {
        self.revenue += record.revenue;
        self.expenses += record.expenses;
        self.profit += record.profit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn record(revenue: i64, expenses: i64) -> FinancialRecord {
        FinancialRecord {
            id: "rep-1".to_string(),
            event: "Hotel Aurora".to_string(),
            client: "Hotel Aurora".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            revenue: Decimal::from(revenue),
            expenses: Decimal::from(expenses),
            profit: Decimal::from(revenue - expenses),
        }
    }

    #[test]
    fn test_margin_percent() {
        assert_float_absolute_eq!(record(8200, 4800).margin_percent(), 41.463, 0.001);
        assert_float_absolute_eq!(record(0, 0).margin_percent(), 0.0, 1e-9);
    }

    #[test]
    fn test_totals_add() {
        let mut totals = FinancialTotals::default();
        totals.add(&record(100, 60));
        totals.add(&record(50, 20));
        assert_eq!(totals.revenue, Decimal::from(150));
        assert_eq!(totals.expenses, Decimal::from(80));
        assert_eq!(totals.profit, Decimal::from(70));
    }
}
