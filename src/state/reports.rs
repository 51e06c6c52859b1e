use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{FinancialRecord, FinancialTotals};

/// Optional constraints; an unset field matches everything. Date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub client: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    pub fn matches(&self, record: &FinancialRecord) -> bool {
        self.client.as_ref().is_none_or(|c| &record.client == c)
            && self.from.is_none_or(|from| record.date >= from)
            && self.to.is_none_or(|to| record.date <= to)
    }
}

/// Per-event financial results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportLedger {
    records: Vec<FinancialRecord>,
}

impl ReportLedger {
    pub fn new(records: Vec<FinancialRecord>) -> Self {
        Self { records }
    }

    pub fn filter(&self, filter: &ReportFilter) -> Vec<&FinancialRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Distinct clients, first-seen order.
    pub fn clients(&self) -> Vec<&str> {
        let mut clients: Vec<&str> = Vec::new();
        for record in &self.records {
            if !clients.contains(&record.client.as_str()) {
                clients.push(&record.client);
            }
        }
        clients
    }

    pub fn all(&self) -> &[FinancialRecord] {
        &self.records
    }
}

pub fn totals<'a>(records: impl IntoIterator<Item = &'a FinancialRecord>) -> FinancialTotals {
    let mut totals = FinancialTotals::default();
    for record in records {
        totals.add(record);
    }
    totals
}

/// Write records to a CSV file for spreadsheet use.
pub fn write_csv(records: &[&FinancialRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "event", "client", "date", "revenue", "expenses", "profit", "margin_pct",
    ])?;

    for record in records {
        wtr.write_record([
            record.event.clone(),
            record.client.clone(),
            record.date.to_string(),
            record.revenue.to_string(),
            record.expenses.to_string(),
            record.profit.to_string(),
            format!("{:.1}", record.margin_percent()),
        ])?;
    }

    wtr.flush()?;
    info!(rows = records.len(), path = %path.display(), "exported report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;

    fn record(id: &str, client: &str, day: u32, revenue: i64, expenses: i64) -> FinancialRecord {
        FinancialRecord {
            id: id.to_string(),
            event: format!("Event {}", id),
            client: client.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            revenue: Decimal::from(revenue),
            expenses: Decimal::from(expenses),
            profit: Decimal::from(revenue - expenses),
        }
    }

    fn ledger() -> ReportLedger {
        ReportLedger::new(vec![
            record("1", "Hotel Aurora", 10, 8200, 4800),
            record("2", "TechCorp", 8, 12500, 7800),
            record("3", "Hotel Aurora", 4, 15200, 9800),
        ])
    }

    #[test]
    fn test_filter_by_client_and_dates() {
        let ledger = ledger();
        let by_client = ReportFilter {
            client: Some("Hotel Aurora".to_string()),
            ..Default::default()
        };
        assert_eq!(ledger.filter(&by_client).len(), 2);

        let window = ReportFilter {
            from: NaiveDate::from_ymd_opt(2026, 2, 8),
            to: NaiveDate::from_ymd_opt(2026, 2, 10),
            ..Default::default()
        };
        let ids: Vec<&str> = ledger.filter(&window).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_totals() {
        let ledger = ledger();
        let sum = totals(ledger.all());
        assert_eq!(sum.revenue, Decimal::from(35900));
        assert_eq!(sum.expenses, Decimal::from(22400));
        assert_eq!(sum.profit, Decimal::from(13500));
    }

    #[test]
    fn test_clients_distinct() {
        assert_eq!(ledger().clients(), vec!["Hotel Aurora", "TechCorp"]);
    }

    #[test]
    fn test_write_csv() {
        let ledger = ledger();
        let file = NamedTempFile::new().unwrap();
        let rows = ledger.filter(&ReportFilter::default());
        write_csv(&rows, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("event,client,date"));
        assert!(lines[1].contains("Hotel Aurora,2026-02-10,8200,4800,3400"));
    }
}
