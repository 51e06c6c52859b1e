mod dashboard;
mod events;
mod menus;
mod notifications;
mod persistence;
mod purchasing;
mod reports;
mod reservations;
mod seed;
mod users;
mod workspace;

pub use dashboard::DashboardKpis;
pub use events::{EventBook, EventDraft};
pub use menus::{MenuBook, RecipeDraft};
pub use notifications::NotificationCenter;
pub use persistence::{load_or_seed, load_workspace, save_workspace};
pub use purchasing::{InventorySummary, PurchasingDesk, ShoppingItem};
pub use reports::{totals, write_csv, ReportFilter, ReportLedger};
pub use reservations::ReservationDesk;
pub use users::{Session, UserDirectory};
pub use workspace::Workspace;
