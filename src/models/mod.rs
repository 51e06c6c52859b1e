mod client;
mod event;
mod finance;
mod inventory;
mod menu;
mod notification;
mod user;

pub use client::{Reservation, ReservationRequest, ReservationStatus, ServiceOffering};
pub use event::{CateringEvent, EventMenuItem, EventStatus, TimelineItem};
pub use finance::{FinancialRecord, FinancialTotals};
pub use inventory::{InventoryEntry, Supplier};
pub use menu::{Ingredient, Menu, Recipe};
pub use notification::{Notification, NotificationCategory, NotificationPreferences};
pub use user::{User, UserDraft, UserRecord};
