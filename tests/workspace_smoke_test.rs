use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use catering_desk::access::{Role, Section};
use catering_desk::costing::{scale_menu_lead_dish, scaled_total_cost};
use catering_desk::models::{
    EventStatus, NotificationCategory, ReservationRequest, ReservationStatus,
};
use catering_desk::state::{
    load_workspace, save_workspace, totals, EventDraft, RecipeDraft, ReportFilter, Workspace,
};
use catering_desk::{logging, CateringError};

#[test]
fn test_chef_scales_the_lead_dish_of_the_first_menu() {
    let mut ws = Workspace::seeded();
    ws.sign_in("lucia@catering.com", "chef123").unwrap();
    ws.authorize(Section::Menus).unwrap();

    let menu = ws.menus.selected(None).unwrap();
    let scaled = scale_menu_lead_dish(menu, 50).unwrap();

    // Grilled salmon, 10 portions -> 50 guests
    assert_eq!(scaled.len(), 3);
    assert_eq!(scaled[0].quantity, Decimal::from(10));
    assert_eq!(scaled[0].cost, Decimal::from(75));
    assert_eq!(scaled[1].quantity, Decimal::new(75, 1));
    assert_eq!(scaled_total_cost(&scaled).unwrap(), Decimal::from(135));
}

#[test]
fn test_roles_are_sent_to_their_default_section() {
    let mut ws = Workspace::seeded();
    ws.sign_in("rafael@catering.com", "purchase123").unwrap();

    match ws.authorize(Section::Reports) {
        Err(CateringError::Forbidden { role, redirect, .. }) => {
            assert_eq!(role, Role::Purchasing);
            assert_eq!(redirect, Section::Purchases);
        }
        other => panic!("expected Forbidden, got {:?}", other.map(|u| u.email.clone())),
    }
    assert!(ws.authorize(Section::Purchases).is_ok());
}

#[test]
fn test_coordinator_schedules_event_from_menu() {
    let mut ws = Workspace::seeded();
    ws.sign_in("marco@catering.com", "coordinator123").unwrap();
    ws.authorize(Section::Events).unwrap();

    let draft = EventDraft {
        client: "Garden Society".to_string(),
        date: Utc::now().date_naive() + Duration::days(30),
        event_type: "Brunch".to_string(),
        attendees: 60,
        status: EventStatus::Draft,
        notes: "Outdoor".to_string(),
        menu_id: Some("menu-1".to_string()),
    };
    let event = ws.events.create(draft, &ws.menus);
    assert_eq!(event.assigned_menus.len(), 2);
    assert_eq!(event.projected_revenue(), Decimal::from(60 * 52 * 2));

    assert_eq!(ws.events.len(), 4);
    assert_eq!(ws.events.filter("garden", Some(EventStatus::Draft)).len(), 1);
}

#[test]
fn test_new_recipe_is_scalable() {
    let mut ws = Workspace::seeded();
    let menu_id = ws
        .menus
        .add_menu("Seasonal showcase", Decimal::from(45))
        .unwrap()
        .id
        .clone();

    let mut draft = RecipeDraft {
        name: "Signature entree".to_string(),
        ..Default::default()
    };
    draft.add_placeholder_ingredient();
    ws.menus.add_recipe(&menu_id, draft).unwrap();

    let menu = ws.menus.get(&menu_id).unwrap();
    let scaled = scale_menu_lead_dish(menu, 50).unwrap();
    // 1 unit / 1.50 for 10 portions -> 5 units / 7.50
    assert_eq!(scaled[0].quantity, Decimal::from(5));
    assert_eq!(scaled[0].cost, Decimal::new(750, 2));
}

#[test]
fn test_purchasing_views() {
    let ws = Workspace::seeded();
    let low: Vec<&str> = ws.purchasing.low_stock().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(low, vec!["Coffee beans", "Dessert trays"]);

    let list = ws.purchasing.shopping_list(&ws.events);
    assert_eq!(list.len(), 7);
    assert!(list.iter().all(|item| item.events == 1));
}

#[test]
fn test_report_filter_by_client() {
    let ws = Workspace::seeded();
    let filter = ReportFilter {
        client: Some("TechCorp".to_string()),
        ..Default::default()
    };
    let rows = ws.reports.filter(&filter);
    assert_eq!(rows.len(), 1);
    assert_eq!(totals(rows).profit, Decimal::from(4700));
}

#[test]
fn test_client_reservation_flow() {
    let mut ws = Workspace::seeded();
    ws.sign_in("paula@catering.com", "client123").unwrap();
    ws.authorize(Section::ClientReservations).unwrap();

    let reservation = ws
        .reservations
        .submit(ReservationRequest {
            service_id: "svc-2".to_string(),
            date: Utc::now().date_naive() + Duration::days(90),
            guests: 120,
            comments: "Vegetarian options please".to_string(),
        })
        .unwrap();
    assert_eq!(reservation.service, "Wedding experience");
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(ws.reservations.reservations().len(), 3);
}

#[test]
fn test_workspace_survives_a_round_trip() {
    logging::init_test();

    let mut ws = Workspace::seeded();
    ws.notifications.mark_as_read("ntf-1");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    save_workspace(&path, &ws).unwrap();

    let reloaded = load_workspace(&path).unwrap();
    assert_eq!(reloaded.notifications.unread_count(), 1);
    assert_eq!(reloaded.reservations.catalog().len(), 3);
    assert_eq!(reloaded.reports.all(), ws.reports.all());
}

#[test]
fn test_back_office_changes_survive_save() {
    let mut ws = Workspace::seeded();
    ws.sign_in("rafael@catering.com", "purchase123").unwrap();
    ws.authorize(Section::Purchases).unwrap();
    ws.purchasing.restock("inv-2", Decimal::from(40)).unwrap();
    ws.purchasing
        .add_supplier("Dairy Co", "hi@dairy.co", "Milk, Cream")
        .unwrap();

    ws.sign_in("marco@catering.com", "coordinator123").unwrap();
    ws.authorize(Section::Events).unwrap();
    ws.events.set_status("evt-1", EventStatus::InProgress).unwrap();
    ws.notifications.toggle_preference(NotificationCategory::Inventory);
    assert!(ws.notifications.mark_as_read("ntf-1"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    save_workspace(&path, &ws).unwrap();
    let reloaded = load_workspace(&path).unwrap();

    assert_eq!(reloaded.purchasing.low_stock().len(), 1);
    assert_eq!(reloaded.purchasing.suppliers().len(), 3);
    assert_eq!(reloaded.events.get("evt-1").unwrap().status, EventStatus::InProgress);
    // ntf-2 is the inventory alert, now hidden; ntf-1 was read.
    assert_eq!(reloaded.notifications.visible().len(), 2);
    assert_eq!(reloaded.notifications.unread_count(), 1);
}

#[test]
fn test_registered_client_can_sign_in() {
    let mut ws = Workspace::seeded();
    let user = ws
        .users
        .register("Nina Ortiz", "nina@mail.com", "s3cret", None)
        .unwrap();
    assert_eq!(user.role, Role::Client);

    ws.sign_in("nina@mail.com", "s3cret").unwrap();
    assert!(ws.authorize(Section::ClientCatalog).is_ok());
    assert!(matches!(
        ws.authorize(Section::Menus),
        Err(CateringError::Forbidden { redirect: Section::ClientCatalog, .. })
    ));
}
