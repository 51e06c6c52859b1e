use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CateringError, Result};
use crate::models::{InventoryEntry, Supplier};
use crate::state::events::EventBook;

/// One line of the generated shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    /// Number of events that need it.
    pub events: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_items: usize,
    pub under_minimum: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Suppliers and stock levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchasingDesk {
    #[serde(default)]
    suppliers: Vec<Supplier>,
    #[serde(default)]
    inventory: Vec<InventoryEntry>,
}

impl PurchasingDesk {
    pub fn new(suppliers: Vec<Supplier>, inventory: Vec<InventoryEntry>) -> Self {
        Self {
            suppliers,
            inventory,
        }
    }

    /// Items at or below their reorder point.
    pub fn low_stock(&self) -> Vec<&InventoryEntry> {
        self.inventory.iter().filter(|i| i.is_low()).collect()
    }

    /// Distinct inventory needs across all events, first-seen order.
    pub fn shopping_list(&self, events: &EventBook) -> Vec<ShoppingItem> {
        let mut items: Vec<ShoppingItem> = Vec::new();
        for need in events.all().iter().flat_map(|e| e.inventory_needs.iter()) {
            match items.iter_mut().find(|item| &item.name == need) {
                Some(item) => item.events += 1,
                None => items.push(ShoppingItem {
                    name: need.clone(),
                    events: 1,
                }),
            }
        }
        items
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total_items: self.inventory.len(),
            under_minimum: self.low_stock().len(),
            last_updated: self.inventory.iter().map(|i| i.last_updated).max(),
        }
    }

    /// Register a supplier from form input. `products` is comma-separated.
    pub fn add_supplier(&mut self, name: &str, contact: &str, products: &str) -> Option<&Supplier> {
        if name.trim().is_empty() {
            debug!("ignoring supplier with blank name");
            return None;
        }
        let supplier = Supplier {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            contact: contact.to_string(),
            products: products
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
        };
        info!(supplier = %supplier.name, products = supplier.products.len(), "added supplier");
        self.suppliers.push(supplier);
        self.suppliers.last()
    }

    /// Record a stock count.
    pub fn restock(&mut self, id: &str, quantity: Decimal) -> Result<&InventoryEntry> {
        if quantity.is_sign_negative() {
            return Err(CateringError::InvalidArgument(
                "stock quantity cannot be negative".to_string(),
            ));
        }
        let entry = self
            .inventory
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CateringError::NotFound(format!("inventory item {}", id)))?;
        entry.quantity = quantity;
        entry.last_updated = Utc::now();
        info!(item = %entry.name, %quantity, "restocked");
        Ok(&*entry)
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    use crate::models::{CateringEvent, EventStatus};

    fn entry(id: &str, quantity: i64, minimum: i64, days_ago: i64) -> InventoryEntry {
        InventoryEntry {
            id: id.to_string(),
            name: id.to_string(),
            quantity: Decimal::from(quantity),
            unit: "kg".to_string(),
            minimum: Decimal::from(minimum),
            last_updated: Utc::now() - Duration::days(days_ago),
        }
    }

    fn event(needs: &[&str]) -> CateringEvent {
        CateringEvent {
            id: "e".to_string(),
            client: "c".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            event_type: "t".to_string(),
            attendees: 10,
            status: EventStatus::Scheduled,
            assigned_menus: vec![],
            staff: vec![],
            inventory_needs: needs.iter().map(|s| s.to_string()).collect(),
            notes: None,
            timeline: vec![],
        }
    }

    #[test]
    fn test_low_stock_and_summary() {
        let desk = PurchasingDesk::new(
            vec![],
            vec![entry("salmon", 45, 30, 1), entry("coffee", 15, 20, 2), entry("trays", 8, 10, 3)],
        );
        assert_eq!(desk.low_stock().len(), 2);

        let summary = desk.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.under_minimum, 2);
        assert_eq!(summary.last_updated, Some(desk.inventory()[0].last_updated));
    }

    #[test]
    fn test_shopping_list_counts_events() {
        let events = EventBook::new(vec![
            event(&["Herbs", "Beef"]),
            event(&["Coffee", "Herbs"]),
        ]);
        let list = PurchasingDesk::default().shopping_list(&events);
        assert_eq!(
            list,
            vec![
                ShoppingItem { name: "Herbs".to_string(), events: 2 },
                ShoppingItem { name: "Beef".to_string(), events: 1 },
                ShoppingItem { name: "Coffee".to_string(), events: 1 },
            ]
        );
    }

    #[test]
    fn test_add_supplier_splits_products() {
        let mut desk = PurchasingDesk::default();
        let supplier = desk
            .add_supplier("Fresh Farms", "sales@farms.com", " Vegetables, Fruit ,,Herbs ")
            .unwrap();
        assert_eq!(supplier.products, vec!["Vegetables", "Fruit", "Herbs"]);
        assert!(desk.add_supplier(" ", "", "").is_none());
        assert_eq!(desk.suppliers().len(), 1);
    }

    #[test]
    fn test_restock() {
        let mut desk = PurchasingDesk::new(vec![], vec![entry("coffee", 15, 20, 5)]);
        desk.restock("coffee", Decimal::from(40)).unwrap();
        assert!(desk.low_stock().is_empty());
        assert!(desk.restock("coffee", Decimal::from(-1)).is_err());
        assert!(desk.restock("tea", Decimal::ONE).is_err());
    }
}
