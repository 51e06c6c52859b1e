use rust_decimal::Decimal;

use crate::costing::ScaledIngredient;
use crate::models::{
    CateringEvent, FinancialRecord, FinancialTotals, Menu, Notification, Recipe, Reservation,
    ServiceOffering, User,
};
use crate::state::{DashboardKpis, InventorySummary, PurchasingDesk, ShoppingItem};

/// Display a recipe scaled to a guest count.
pub fn display_scaled_recipe(recipe: &Recipe, guests: u32, scaled: &[ScaledIngredient], total: Decimal) {
    if scaled.is_empty() {
        println!("Select or create a recipe with ingredients to enable automatic scaling.");
        return;
    }

    println!();
    println!(
        "=== {} (base {} portions -> {} guests) ===",
        recipe.name, recipe.portion_size, guests
    );
    println!();

    let name_width = scaled.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in scaled {
        println!(
            "  {:<width$}  {:>10} {:<6} ${:>10}",
            item.name,
            item.quantity,
            item.unit,
            item.cost,
            width = name_width
        );
    }

    println!();
    println!("Total ingredient cost: ${}", total);
    println!();
}

/// Display menus with their dishes and portion sizes.
pub fn display_menus(menus: &[Menu]) {
    println!();
    println!("=== Menus ({}) ===", menus.len());

    for menu in menus {
        println!();
        println!("  [{}] {} (${} per guest)", menu.id, menu.name, menu.estimated_price);
        if menu.dishes.is_empty() {
            println!("      no dishes yet");
        }
        for dish in &menu.dishes {
            println!(
                "      - {} ({} portions, {} ingredients, base cost {})",
                dish.name,
                dish.portion_size,
                dish.ingredients.len(),
                dish.base_cost()
                    .map_or_else(|| "n/a".to_string(), |cost| format!("${}", cost))
            );
        }
    }
    println!();
}

/// Display events as a list.
pub fn display_events(events: &[&CateringEvent]) {
    println!();
    println!("=== Events ({}) ===", events.len());
    println!();

    for event in events {
        let (done, total) = event.timeline_progress();
        let menus: Vec<&str> = event.assigned_menus.iter().map(|m| m.name.as_str()).collect();
        println!(
            "  [{}] {} - {} ({}), {} guests, {}",
            event.status, event.date, event.client, event.event_type, event.attendees, event.id
        );
        if !menus.is_empty() {
            println!("      menus: {}", menus.join(", "));
        }
        if total > 0 {
            println!("      timeline: {}/{} done", done, total);
        }
    }
    println!();
}

/// Display the purchasing overview: summary, low stock, shopping list, suppliers.
pub fn display_purchasing(desk: &PurchasingDesk, summary: &InventorySummary, list: &[ShoppingItem]) {
    println!();
    println!("=== Inventory ===");
    println!(
        "Items: {}  Under minimum: {}  Last update: {}",
        summary.total_items,
        summary.under_minimum,
        summary
            .last_updated
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    let low = desk.low_stock();
    if low.is_empty() {
        println!("All stock above minimum.");
    } else {
        println!();
        println!("--- Low stock ---");
        for item in low {
            println!(
                "  {}: {} {} left, minimum {}",
                item.name, item.quantity, item.unit, item.minimum
            );
        }
    }

    println!();
    println!("--- Shopping list ---");
    for item in list {
        println!("  {} (needed by {} event(s))", item.name, item.events);
    }

    println!();
    println!("--- Suppliers ---");
    for supplier in desk.suppliers() {
        println!(
            "  {} <{}>: {}",
            supplier.name,
            supplier.contact,
            supplier.products.join(", ")
        );
    }
    println!();
}

/// Display a financial report with totals.
pub fn display_report(records: &[&FinancialRecord], totals: &FinancialTotals) {
    println!();
    println!("=== Financial report ({} events) ===", records.len());
    println!();

    for r in records {
        println!(
            "  {}  {:<20} {:<16} revenue ${:>9}  expenses ${:>9}  margin {:>5.1}%",
            r.date,
            r.event,
            r.client,
            r.revenue,
            r.expenses,
            r.margin_percent()
        );
    }

    println!();
    println!("Total revenue: ${}", totals.revenue);
    println!("Expenses ${} - Profit ${}", totals.expenses, totals.profit);
    println!();
}

pub fn display_catalog(catalog: &[ServiceOffering]) {
    println!();
    println!("=== Services ===");
    for service in catalog {
        println!("  [{}] {} ({})", service.id, service.name, service.price_range);
        println!("      {}", service.description);
    }
    println!();
}

pub fn display_reservations(reservations: &[Reservation]) {
    println!("=== Reservations ===");
    for r in reservations {
        println!("  {}  {:<22} {:>4} guests  {}", r.date, r.service, r.guests, r.status);
    }
    println!();
}

pub fn display_notifications(notifications: &[&Notification], unread: usize) {
    println!();
    println!("=== Notifications ({} unread) ===", unread);
    for n in notifications {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{} [{}] {} - {}",
            marker,
            n.category,
            n.timestamp.format("%Y-%m-%d %H:%M"),
            n.title
        );
        println!("      {}", n.message);
    }
    println!();
}

pub fn display_dashboard(kpis: &DashboardKpis<'_>) {
    println!();
    println!("=== Dashboard ===");
    println!("Events scheduled:      {}", kpis.events_scheduled);
    println!(
        "Revenue / expenses:    ${} / ${} (profit ${})",
        kpis.financial.revenue, kpis.financial.expenses, kpis.financial.profit
    );
    println!("Critical stock items:  {}", kpis.critical_items);
    println!("Unread notifications:  {}", kpis.unread_notifications);
    println!();
    println!("--- Recent reservations ---");
    for r in &kpis.recent_reservations {
        println!("  {}  {}  {} guests", r.date, r.service, r.guests);
    }
    println!();
}

pub fn display_users(users: &[&User]) {
    println!();
    println!("=== Users ({}) ===", users.len());
    for user in users {
        let permissions: Vec<&str> = user.permissions().iter().map(|p| p.as_str()).collect();
        println!("  {:<16} {:<24} {:<20} {}", user.name, user.email, user.role, permissions.join(" "));
    }
    println!();
}
