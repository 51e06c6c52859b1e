use chrono::Utc;
use clap::Parser;
use tracing::info;
use uuid::Uuid;

use catering_desk::access::Section;
use catering_desk::cli::{Cli, Command, EventAction, MenuAction};
use catering_desk::costing::{scale, scaled_total_cost};
use catering_desk::error::{CateringError, Result};
use catering_desk::interface::{
    display_catalog, display_dashboard, display_events, display_menus, display_notifications,
    display_purchasing, display_report, display_reservations, display_scaled_recipe,
    display_users, prompt_guest_count, prompt_new_password, prompt_password, resolve_recipe,
};
use catering_desk::logging;
use catering_desk::models::{
    EventStatus, Notification, NotificationCategory, ReservationRequest,
};
use catering_desk::state::{
    load_or_seed, save_workspace, totals, write_csv, DashboardKpis, EventDraft, RecipeDraft,
    ReportFilter, Workspace,
};
use rust_decimal::Decimal;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut ws = load_or_seed(&cli.file)?;

    // Registration creates the account it signs in with.
    if !matches!(command, Command::Register { .. }) {
        let password = match cli.password.clone() {
            Some(p) => p,
            None => prompt_password(&cli.user)?,
        };
        let user = ws.sign_in(&cli.user, &password)?;
        println!("Signed in as {} ({})", user.name, user.role);
    }

    let changed = match command {
        Command::Register { name, email } => {
            let password = match cli.password {
                Some(p) => p,
                None => prompt_new_password()?,
            };
            cmd_register(&mut ws, &name, &email, &password)?
        }
        Command::Dashboard => cmd_dashboard(&ws)?,
        Command::Scale { recipe, guests } => cmd_scale(&ws, recipe.as_deref(), guests)?,
        Command::Menu { action } => cmd_menu(&mut ws, action)?,
        Command::Event { action } => cmd_event(&mut ws, action)?,
        Command::Events { client, status } => cmd_events(&ws, &client, status)?,
        Command::Purchases => cmd_purchases(&ws)?,
        Command::Supplier {
            name,
            contact,
            products,
        } => cmd_supplier(&mut ws, &name, &contact, &products)?,
        Command::Restock { item, quantity } => cmd_restock(&mut ws, &item, quantity)?,
        Command::Report {
            client,
            from,
            to,
            csv,
        } => cmd_report(&ws, ReportFilter { client, from, to }, csv.as_deref())?,
        Command::Catalog => cmd_catalog(&ws)?,
        Command::Reserve {
            service,
            date,
            guests,
            comments,
        } => cmd_reserve(
            &mut ws,
            ReservationRequest {
                service_id: service,
                date,
                guests,
                comments,
            },
        )?,
        Command::Notifications { read, toggle } => cmd_notifications(&mut ws, read, toggle)?,
        Command::Users { search } => cmd_users(&ws, &search)?,
    };

    if changed {
        if cli.save {
            save_workspace(&cli.file, &ws)?;
            println!("Workspace saved to {}.", cli.file.display());
        } else {
            println!("Changes not saved (use --save to keep them).");
        }
    }

    Ok(())
}

/// Create a client account and sign in with it.
fn cmd_register(ws: &mut Workspace, name: &str, email: &str, password: &str) -> Result<bool> {
    let user = ws.users.register(name, email, password, None)?;
    ws.sign_in(&user.email, password)?;
    println!("Account created for {} ({}).", user.name, user.role);
    Ok(true)
}

/// Headline figures. Read-only.
fn cmd_dashboard(ws: &Workspace) -> Result<bool> {
    ws.authorize(Section::Dashboard)?;
    display_dashboard(&DashboardKpis::from_workspace(ws));
    Ok(false)
}

/// Scale a recipe to a guest count.
fn cmd_scale(ws: &Workspace, recipe_name: Option<&str>, guests: Option<u32>) -> Result<bool> {
    ws.authorize(Section::Menus)?;

    let recipes = ws.menus.all_recipes();
    let Some(recipe) = resolve_recipe(&recipes, recipe_name)? else {
        println!("No recipe selected.");
        return Ok(false);
    };

    let guests = match guests {
        Some(g) => g,
        None => prompt_guest_count()?,
    };

    let scaled = scale(recipe, guests)?;
    let total = scaled_total_cost(&scaled)?;
    info!(recipe = %recipe.name, guests, lines = scaled.len(), %total, "scaled recipe");
    display_scaled_recipe(recipe, guests, &scaled, total);
    Ok(false)
}

fn cmd_menu(ws: &mut Workspace, action: MenuAction) -> Result<bool> {
    ws.authorize(Section::Menus)?;

    match action {
        MenuAction::List => {
            display_menus(ws.menus.all());
            Ok(false)
        }
        MenuAction::Add { name, price } => {
            let menu = ws
                .menus
                .add_menu(&name, price)
                .ok_or_else(|| CateringError::InvalidArgument("menu name cannot be blank".to_string()))?;
            println!("Added menu '{}' ({}).", menu.name, menu.id);
            Ok(true)
        }
        MenuAction::Recipe {
            menu,
            name,
            portions,
            ingredients,
        } => {
            let mut draft = RecipeDraft {
                name,
                portion_size: portions,
                ingredients,
            };
            if draft.ingredients.is_empty() {
                draft.add_placeholder_ingredient();
            }
            let recipe = ws.menus.add_recipe(&menu, draft)?;
            println!(
                "Added '{}' for {} portions with {} ingredient(s).",
                recipe.name,
                recipe.portion_size,
                recipe.ingredients.len()
            );
            Ok(true)
        }
    }
}

fn cmd_event(ws: &mut Workspace, action: EventAction) -> Result<bool> {
    ws.authorize(Section::Events)?;

    match action {
        EventAction::Create {
            client,
            date,
            event_type,
            attendees,
            status,
            notes,
            menu,
        } => {
            let draft = EventDraft {
                client,
                date,
                event_type,
                attendees,
                status,
                notes,
                menu_id: menu,
            };
            let event = ws.events.create(draft, &ws.menus);
            println!(
                "Scheduled {} for {} on {} ({}), projected revenue ${}.",
                event.event_type,
                event.client,
                event.date,
                event.id,
                event.projected_revenue()
            );
        }
        EventAction::Status { id, status } => {
            ws.events.set_status(&id, status)?;
            println!("Event {} is now {}.", id, status);
        }
    }
    Ok(true)
}

fn cmd_events(ws: &Workspace, client: &str, status: Option<EventStatus>) -> Result<bool> {
    ws.authorize(Section::Events)?;
    display_events(&ws.events.filter(client, status));
    Ok(false)
}

fn cmd_purchases(ws: &Workspace) -> Result<bool> {
    ws.authorize(Section::Purchases)?;
    let list = ws.purchasing.shopping_list(&ws.events);
    display_purchasing(&ws.purchasing, &ws.purchasing.summary(), &list);
    Ok(false)
}

fn cmd_supplier(ws: &mut Workspace, name: &str, contact: &str, products: &str) -> Result<bool> {
    ws.authorize(Section::Purchases)?;
    let supplier = ws
        .purchasing
        .add_supplier(name, contact, products)
        .ok_or_else(|| CateringError::InvalidArgument("supplier name cannot be blank".to_string()))?;
    println!("Added supplier {} ({} products).", supplier.name, supplier.products.len());
    Ok(true)
}

fn cmd_restock(ws: &mut Workspace, item: &str, quantity: Decimal) -> Result<bool> {
    ws.authorize(Section::Purchases)?;
    let entry = ws.purchasing.restock(item, quantity)?;
    println!(
        "{} now at {} {} (minimum {}){}.",
        entry.name,
        entry.quantity,
        entry.unit,
        entry.minimum,
        if entry.is_low() { ", still low" } else { "" }
    );
    Ok(true)
}

fn cmd_report(
    ws: &Workspace,
    filter: ReportFilter,
    csv_path: Option<&std::path::Path>,
) -> Result<bool> {
    ws.authorize(Section::Reports)?;

    let rows = ws.reports.filter(&filter);
    display_report(&rows, &totals(rows.iter().copied()));

    if let Some(path) = csv_path {
        write_csv(&rows, path)?;
        println!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(false)
}

fn cmd_catalog(ws: &Workspace) -> Result<bool> {
    ws.authorize(Section::ClientCatalog)?;
    display_catalog(ws.reservations.catalog());
    display_reservations(ws.reservations.reservations());
    Ok(false)
}

/// File a reservation and notify the coordinators.
fn cmd_reserve(ws: &mut Workspace, request: ReservationRequest) -> Result<bool> {
    let requester = ws.authorize(Section::ClientReservations)?.name.clone();

    let reservation = ws.reservations.submit(request)?;
    println!(
        "Reservation requested: {} on {} for {} guests ({}).",
        reservation.service, reservation.date, reservation.guests, reservation.status
    );

    let message = format!(
        "{} requested {} for {} guests.",
        requester, reservation.service, reservation.guests
    );
    ws.notifications.add(Notification {
        id: Uuid::new_v4().to_string(),
        title: "New reservation request".to_string(),
        message,
        timestamp: Utc::now(),
        category: NotificationCategory::Reservations,
        read: false,
    });
    Ok(true)
}

/// Show the feed, after marking a notification read or flipping a category.
fn cmd_notifications(
    ws: &mut Workspace,
    read: Option<String>,
    toggle: Option<NotificationCategory>,
) -> Result<bool> {
    ws.authorize(Section::Notifications)?;
    let mut changed = false;

    if let Some(id) = read {
        if !ws.notifications.mark_as_read(&id) {
            return Err(CateringError::NotFound(format!("notification {}", id)));
        }
        changed = true;
    }
    if let Some(category) = toggle {
        let enabled = ws.notifications.toggle_preference(category);
        println!(
            "{} notifications are now {}.",
            category,
            if enabled { "shown" } else { "hidden" }
        );
        changed = true;
    }

    display_notifications(&ws.notifications.visible(), ws.notifications.unread_count());
    Ok(changed)
}

fn cmd_users(ws: &Workspace, search: &str) -> Result<bool> {
    ws.authorize(Section::Users)?;
    display_users(&ws.users.search(search));
    Ok(false)
}
