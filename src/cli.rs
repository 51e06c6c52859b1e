use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::{DEFAULT_PORTION_SIZE, DEFAULT_WORKSPACE_FILE};
use crate::error::CateringError;
use crate::models::{EventStatus, Ingredient, NotificationCategory};

/// catering_desk: the back office for a catering business.
#[derive(Parser, Debug)]
#[command(name = "catering_desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the workspace JSON file. Demo data is used when it does not exist.
    #[arg(short, long, default_value = DEFAULT_WORKSPACE_FILE)]
    pub file: PathBuf,

    /// Email of the account to sign in with.
    #[arg(short, long, default_value = "amelia@catering.com")]
    pub user: String,

    /// Password; prompted for when omitted. With `register`, the new account's password.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Write changes back to the workspace file.
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a client account and sign in with it.
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Show headline figures (administrators).
    Dashboard,

    /// Scale a recipe's ingredients and costs to a guest count.
    Scale {
        /// Recipe name; fuzzy matched. Choose from a list when omitted.
        #[arg(short, long)]
        recipe: Option<String>,

        /// Number of guests; prompted for when omitted.
        #[arg(short, long)]
        guests: Option<u32>,
    },

    /// Menus and their recipes (coordinators and chefs).
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Schedule an event or change its status.
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// List events, optionally filtered.
    Events {
        /// Part of the client name.
        #[arg(long, default_value = "")]
        client: String,

        /// draft, scheduled, in-progress or completed.
        #[arg(long, value_parser = parse_status)]
        status: Option<EventStatus>,
    },

    /// Inventory, shopping list and suppliers.
    Purchases,

    /// Register a supplier.
    Supplier {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        contact: String,

        /// Comma-separated product list.
        #[arg(long, default_value = "")]
        products: String,
    },

    /// Record a stock count for an inventory item.
    Restock {
        /// Inventory item id, e.g. inv-2.
        #[arg(long)]
        item: String,

        #[arg(long)]
        quantity: Decimal,
    },

    /// Financial report with optional filters and CSV export.
    Report {
        #[arg(long)]
        client: Option<String>,

        /// Inclusive start date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Inclusive end date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Also write the rows to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Browse the services catalog and your reservations.
    Catalog,

    /// Request a reservation.
    Reserve {
        /// Catalog service id, e.g. svc-1.
        #[arg(long)]
        service: String,

        /// Preferred date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        guests: u32,

        #[arg(long, default_value = "")]
        comments: String,
    },

    /// Show notifications in enabled categories.
    Notifications {
        /// Mark this notification as read.
        #[arg(long)]
        read: Option<String>,

        /// Show or hide a category: events, inventory, reservations, finance or system.
        #[arg(long, value_parser = parse_category)]
        toggle: Option<NotificationCategory>,
    },

    /// List accounts (administrators).
    Users {
        /// Filter by name or email.
        #[arg(long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    /// List menus with their dishes.
    List,

    /// Create an empty menu.
    Add {
        #[arg(long)]
        name: String,

        /// Estimated price per guest.
        #[arg(long)]
        price: Decimal,
    },

    /// Add a recipe to a menu.
    Recipe {
        /// Menu id, e.g. menu-1.
        #[arg(long)]
        menu: String,

        #[arg(long)]
        name: String,

        /// Portions the quantities are written for.
        #[arg(long, default_value_t = DEFAULT_PORTION_SIZE)]
        portions: u32,

        /// `name:quantity:unit:cost`, repeatable. A placeholder line is added when none is given.
        #[arg(long = "ingredient", value_parser = parse_ingredient)]
        ingredients: Vec<Ingredient>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventAction {
    /// Schedule an event, optionally booking a menu.
    Create {
        #[arg(long)]
        client: String,

        /// Event date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        #[arg(long = "type")]
        event_type: String,

        #[arg(long)]
        attendees: u32,

        #[arg(long, value_parser = parse_status, default_value = "draft")]
        status: EventStatus,

        #[arg(long, default_value = "")]
        notes: String,

        /// Menu id whose dishes are booked for the event.
        #[arg(long)]
        menu: Option<String>,
    },

    /// Move an event to another status.
    Status {
        #[arg(long)]
        id: String,

        #[arg(long, value_parser = parse_status)]
        status: EventStatus,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Notifications {
            read: None,
            toggle: None,
        }
    }
}

fn parse_status(s: &str) -> Result<EventStatus, String> {
    s.parse().map_err(|e: CateringError| e.to_string())
}

fn parse_category(s: &str) -> Result<NotificationCategory, String> {
    s.parse().map_err(|e: CateringError| e.to_string())
}

fn parse_ingredient(s: &str) -> Result<Ingredient, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let [name, quantity, unit, cost] = parts.as_slice() else {
        return Err(format!("expected name:quantity:unit:cost, got '{}'", s));
    };
    if name.is_empty() {
        return Err("ingredient name cannot be empty".to_string());
    }

    let quantity: Decimal = quantity
        .parse()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
    let cost: Decimal = cost
        .parse()
        .map_err(|e| format!("invalid cost '{}': {}", cost, e))?;

    Ok(Ingredient::new(Uuid::new_v4().to_string(), *name, *unit, quantity, cost))
}
