use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub products: Vec<String>,
}

/// Stock on hand for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: String,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    /// Reorder point.
    pub minimum: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl InventoryEntry {
    /// At or below the reorder point.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.quantity <= self.minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_low_inclusive() {
        let mut entry = InventoryEntry {
            id: "inv-1".to_string(),
            name: "Coffee beans".to_string(),
            quantity: Decimal::new(20, 0),
            unit: "kg".to_string(),
            minimum: Decimal::new(20, 0),
            last_updated: Utc::now(),
        };
        assert!(entry.is_low());

        entry.quantity = Decimal::new(21, 0);
        assert!(!entry.is_low());
    }
}
