use serde::{Deserialize, Serialize};

use crate::access::{AccessGate, Section};
use crate::error::Result;
use crate::models::User;
use crate::state::events::EventBook;
use crate::state::menus::MenuBook;
use crate::state::notifications::NotificationCenter;
use crate::state::purchasing::PurchasingDesk;
use crate::state::reports::ReportLedger;
use crate::state::reservations::ReservationDesk;
use crate::state::users::{Session, UserDirectory};

/// Everything one back-office session works on.
///
/// Built once at start-up, handed by reference to whoever needs it, dropped on exit.
/// The session is never written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub users: UserDirectory,
    #[serde(default)]
    pub events: EventBook,
    #[serde(default)]
    pub menus: MenuBook,
    #[serde(default)]
    pub purchasing: PurchasingDesk,
    #[serde(default)]
    pub reports: ReportLedger,
    #[serde(default)]
    pub reservations: ReservationDesk,
    #[serde(default)]
    pub notifications: NotificationCenter,
    #[serde(skip)]
    pub session: Session,
}

impl Workspace {
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&User> {
        self.session.sign_in(&self.users, email, password)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Check the signed-in user against a section.
    pub fn authorize(&self, section: Section) -> Result<&User> {
        AccessGate.authorize(self.session.current(), section)
    }

    /// Delete an account, ending the session if it was the signed-in one.
    pub fn delete_user(&mut self, id: &str) -> bool {
        self.session.delete_user(&mut self.users, id)
    }
}
