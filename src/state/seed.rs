use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::access::Role;
use crate::models::{
    CateringEvent, EventMenuItem, EventStatus, FinancialRecord, Ingredient, InventoryEntry, Menu,
    Notification, NotificationCategory, Recipe, Reservation, ReservationStatus, ServiceOffering,
    Supplier, TimelineItem, User, UserRecord,
};
use crate::state::{
    EventBook, MenuBook, NotificationCenter, PurchasingDesk, ReportLedger, ReservationDesk,
    UserDirectory, Workspace,
};

fn day(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

fn user(id: &str, name: &str, email: &str, role: Role, password: &str) -> UserRecord {
    UserRecord {
        user: User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        },
        password: password.to_string(),
    }
}

fn ingredient(id: &str, name: &str, unit: &str, quantity: Decimal, cost: i64) -> Ingredient {
    Ingredient::new(id, name, unit, quantity, Decimal::from(cost))
}

fn menu_item(id: &str, name: &str, price: i64) -> EventMenuItem {
    EventMenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price_per_guest: Decimal::from(price),
    }
}

fn milestone(id: &str, label: &str, offset: i64, completed: bool) -> TimelineItem {
    TimelineItem {
        id: id.to_string(),
        label: label.to_string(),
        due_date: day(offset),
        completed,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn users() -> UserDirectory {
    UserDirectory::new(vec![
        user("1", "Amelia Reyes", "amelia@catering.com", Role::Administrator, "admin123"),
        user("2", "Marco Silva", "marco@catering.com", Role::Coordinator, "coordinator123"),
        user("3", "Lucia Torres", "lucia@catering.com", Role::Chef, "chef123"),
        user("4", "Rafael Gomez", "rafael@catering.com", Role::Purchasing, "purchase123"),
        user("5", "Paula Medina", "paula@catering.com", Role::Client, "client123"),
    ])
}

fn events() -> EventBook {
    EventBook::new(vec![
        CateringEvent {
            id: "evt-1".to_string(),
            client: "Hotel Aurora".to_string(),
            date: day(3),
            event_type: "Corporate gala".to_string(),
            attendees: 180,
            status: EventStatus::Scheduled,
            assigned_menus: vec![
                menu_item("menu-1", "Mediterranean elegance", 45),
                menu_item("menu-2", "Signature desserts", 12),
            ],
            staff: strings(&["Marco Silva", "Lucia Torres", "Ana Perez"]),
            inventory_needs: strings(&["Salmon fillets", "Seasonal vegetables", "Dessert station setup"]),
            notes: Some("VIP seating required".to_string()),
            timeline: vec![
                milestone("tl-1", "Menu confirmation", 5, true),
                milestone("tl-2", "Supplier orders", 2, false),
            ],
        },
        CateringEvent {
            id: "evt-2".to_string(),
            client: "Ramirez wedding".to_string(),
            date: day(10),
            event_type: "Wedding".to_string(),
            attendees: 150,
            status: EventStatus::InProgress,
            assigned_menus: vec![menu_item("menu-3", "Fresh garden", 38)],
            staff: strings(&["Lucia Torres", "Ana Perez"]),
            inventory_needs: strings(&["Fresh herbs", "Premium beef cuts"]),
            notes: None,
            timeline: vec![milestone("tl-3", "Tasting session", -7, true)],
        },
        CateringEvent {
            id: "evt-3".to_string(),
            client: "TechCorp Summit".to_string(),
            date: day(-5),
            event_type: "Conference".to_string(),
            attendees: 220,
            status: EventStatus::Completed,
            assigned_menus: vec![menu_item("menu-4", "Executive buffet", 35)],
            staff: strings(&["Marco Silva", "Rafael Gomez"]),
            inventory_needs: strings(&["Coffee beans", "Pastry selection"]),
            notes: None,
            timeline: vec![milestone("tl-4", "Logistics meeting", -12, true)],
        },
    ])
}

fn menus() -> MenuBook {
    let salmon = Recipe {
        id: "rec-1".to_string(),
        name: "Grilled salmon with asparagus".to_string(),
        portion_size: 10,
        ingredients: vec![
            ingredient("ing-1", "Salmon fillet", "kg", dec(2, 0), 15),
            ingredient("ing-2", "Asparagus", "kg", dec(15, 1), 8),
            ingredient("ing-3", "Lemon butter sauce", "ltr", dec(1, 0), 4),
        ],
    };
    let couscous = Recipe {
        id: "rec-2".to_string(),
        name: "Roasted vegetable couscous".to_string(),
        portion_size: 12,
        ingredients: vec![
            ingredient("ing-4", "Couscous", "kg", dec(1, 0), 3),
            ingredient("ing-5", "Seasonal vegetables", "kg", dec(2, 0), 5),
            ingredient("ing-6", "Herb dressing", "ltr", dec(5, 1), 2),
        ],
    };
    let fountain = Recipe {
        id: "rec-3".to_string(),
        name: "Chocolate fountain selection".to_string(),
        portion_size: 20,
        ingredients: vec![
            ingredient("ing-7", "Dark chocolate", "kg", dec(2, 0), 12),
            ingredient("ing-8", "Fresh fruit", "kg", dec(3, 0), 9),
        ],
    };

    MenuBook::new(vec![
        Menu {
            id: "menu-1".to_string(),
            name: "Mediterranean elegance".to_string(),
            dishes: vec![salmon, couscous],
            estimated_price: Decimal::from(52),
        },
        Menu {
            id: "menu-2".to_string(),
            name: "Signature desserts".to_string(),
            dishes: vec![fountain],
            estimated_price: Decimal::from(18),
        },
    ])
}

fn purchasing() -> PurchasingDesk {
    let now = Utc::now();
    let stock = |id: &str, name: &str, quantity: i64, unit: &str, minimum: i64, days_ago: i64| {
        InventoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            quantity: Decimal::from(quantity),
            unit: unit.to_string(),
            minimum: Decimal::from(minimum),
            last_updated: now - Duration::days(days_ago),
        }
    };

    PurchasingDesk::new(
        vec![
            Supplier {
                id: "sup-1".to_string(),
                name: "Gourmet Provisions".to_string(),
                contact: "contact@gourmetprovisions.com".to_string(),
                products: strings(&["Seafood", "Premium meats", "Cheeses"]),
            },
            Supplier {
                id: "sup-2".to_string(),
                name: "Fresh Farms".to_string(),
                contact: "sales@freshfarms.com".to_string(),
                products: strings(&["Vegetables", "Fruit", "Herbs"]),
            },
        ],
        vec![
            stock("inv-1", "Salmon fillet", 45, "kg", 30, 1),
            stock("inv-2", "Coffee beans", 15, "kg", 20, 2),
            stock("inv-3", "Dessert trays", 8, "units", 10, 3),
        ],
    )
}

fn reports() -> ReportLedger {
    let record = |id: &str, event: &str, client: &str, revenue: i64, expenses: i64, days_ago: i64| {
        FinancialRecord {
            id: id.to_string(),
            event: event.to_string(),
            client: client.to_string(),
            date: day(-days_ago),
            revenue: Decimal::from(revenue),
            expenses: Decimal::from(expenses),
            profit: Decimal::from(revenue - expenses),
        }
    };

    ReportLedger::new(vec![
        record("rep-1", "Hotel Aurora", "Hotel Aurora", 8200, 4800, 4),
        record("rep-2", "TechCorp Summit", "TechCorp", 12500, 7800, 6),
        record("rep-3", "Ramirez wedding", "Ramirez family", 15200, 9800, 10),
    ])
}

fn reservations() -> ReservationDesk {
    let offering = |id: &str, name: &str, description: &str, price_range: &str| ServiceOffering {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_range: price_range.to_string(),
    };

    ReservationDesk::new(
        vec![
            offering(
                "svc-1",
                "Corporate packages",
                "Buffet menus tuned for business meetings.",
                "$35 - $60 per guest",
            ),
            offering(
                "svc-2",
                "Wedding experience",
                "Full-service wedding catering with bespoke menus and styling.",
                "$55 - $90 per guest",
            ),
            offering(
                "svc-3",
                "Private events",
                "Intimate gatherings, chef's tables and themed celebrations.",
                "$40 - $75 per guest",
            ),
        ],
        vec![
            Reservation {
                id: "res-1".to_string(),
                service: "Corporate packages".to_string(),
                date: day(-1),
                guests: 75,
                status: ReservationStatus::Pending,
                comments: String::new(),
            },
            Reservation {
                id: "res-2".to_string(),
                service: "Wedding experience".to_string(),
                date: day(-20),
                guests: 150,
                status: ReservationStatus::Confirmed,
                comments: String::new(),
            },
        ],
    )
}

fn notifications() -> NotificationCenter {
    let now = Utc::now();
    let note = |id: &str, title: &str, message: &str, category, days_ago: i64, read: bool| Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        timestamp: now - Duration::days(days_ago),
        category,
        read,
    };

    NotificationCenter::new(vec![
        note(
            "ntf-1",
            "New reservation request",
            "Paula Medina requested a corporate brunch for 75 guests.",
            NotificationCategory::Reservations,
            0,
            false,
        ),
        note(
            "ntf-2",
            "Inventory alert",
            "Coffee bean stock is below the minimum.",
            NotificationCategory::Inventory,
            1,
            false,
        ),
        note(
            "ntf-3",
            "Event update",
            "The timeline for the Hotel Aurora corporate gala was updated.",
            NotificationCategory::Events,
            2,
            true,
        ),
    ])
}

impl Workspace {
    /// The demo data set the back office ships with.
    pub fn seeded() -> Self {
        Workspace {
            users: users(),
            events: events(),
            menus: menus(),
            purchasing: purchasing(),
            reports: reports(),
            reservations: reservations(),
            notifications: notifications(),
            ..Default::default()
        }
    }
}
