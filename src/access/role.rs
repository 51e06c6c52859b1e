use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CateringError;

/// Back-office roles. Everything a role may do is derived from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Coordinator,
    Chef,
    Purchasing,
    Client,
}

/// A single capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "dashboard:view")]
    DashboardView,
    #[serde(rename = "users:manage")]
    UsersManage,
    #[serde(rename = "reports:view")]
    ReportsView,
    #[serde(rename = "notifications:manage")]
    NotificationsManage,
    #[serde(rename = "events:manage")]
    EventsManage,
    #[serde(rename = "menus:manage")]
    MenusManage,
    #[serde(rename = "inventory:manage")]
    InventoryManage,
    #[serde(rename = "purchases:manage")]
    PurchasesManage,
    #[serde(rename = "client:portal")]
    ClientPortal,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::DashboardView => "dashboard:view",
            Permission::UsersManage => "users:manage",
            Permission::ReportsView => "reports:view",
            Permission::NotificationsManage => "notifications:manage",
            Permission::EventsManage => "events:manage",
            Permission::MenusManage => "menus:manage",
            Permission::InventoryManage => "inventory:manage",
            Permission::PurchasesManage => "purchases:manage",
            Permission::ClientPortal => "client:portal",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Coordinator,
        Role::Chef,
        Role::Purchasing,
        Role::Client,
    ];

    /// Capability set granted to the role.
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Administrator => &[DashboardView, UsersManage, ReportsView, NotificationsManage],
            Role::Coordinator => &[EventsManage, MenusManage, NotificationsManage],
            Role::Chef => &[MenusManage],
            Role::Purchasing => &[InventoryManage, PurchasesManage],
            Role::Client => &[ClientPortal],
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Coordinator => "Event coordinator",
            Role::Chef => "Chef",
            Role::Purchasing => "Purchasing manager",
            Role::Client => "Client",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Coordinator => "coordinator",
            Role::Chef => "chef",
            Role::Purchasing => "purchasing",
            Role::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Role {
    type Err = CateringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| CateringError::InvalidArgument(format!("unknown role '{}'", s)))
    }
}
