use std::fmt;

use tracing::{debug, warn};

use crate::access::Role;
use crate::error::{CateringError, Result};
use crate::models::User;

/// A navigable area of the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Users,
    Reports,
    Events,
    Menus,
    Purchases,
    ClientCatalog,
    ClientReservations,
    Notifications,
}

impl Section {
    /// Roles allowed to open this section.
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Role::*;
        match self {
            Section::Dashboard | Section::Users | Section::Reports => &[Administrator],
            Section::Events => &[Administrator, Coordinator],
            Section::Menus => &[Coordinator, Chef],
            Section::Purchases => &[Administrator, Purchasing],
            Section::ClientCatalog | Section::ClientReservations => &[Client, Administrator],
            Section::Notifications => &Role::ALL,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Dashboard => "/dashboard",
            Section::Users => "/users",
            Section::Reports => "/reports",
            Section::Events => "/events",
            Section::Menus => "/menus",
            Section::Purchases => "/purchases",
            Section::ClientCatalog => "/client/catalog",
            Section::ClientReservations => "/client/reservations",
            Section::Notifications => "/notifications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Role {
    /// Where the role lands after signing in, and where it is sent when refused.
    pub fn default_section(&self) -> Section {
        match self {
            Role::Administrator => Section::Dashboard,
            Role::Coordinator => Section::Events,
            Role::Chef => Section::Menus,
            Role::Purchasing => Section::Purchases,
            Role::Client => Section::ClientCatalog,
        }
    }

    pub fn can_open(&self, section: Section) -> bool {
        section.allowed_roles().contains(self)
    }
}

/// The one place where section access is decided.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessGate;

impl AccessGate {
    pub fn authorize<'a>(&self, session: Option<&'a User>, section: Section) -> Result<&'a User> {
        let user = session.ok_or(CateringError::Unauthenticated)?;

        if user.role.can_open(section) {
            debug!(user = %user.email, %section, "access granted");
            return Ok(user);
        }

        let redirect = user.role.default_section();
        warn!(user = %user.email, %section, %redirect, "access refused");
        Err(CateringError::Forbidden {
            role: user.role,
            section,
            redirect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u".to_string(),
            name: "Test".to_string(),
            email: "test@catering.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_no_session_is_unauthenticated() {
        let err = AccessGate.authorize(None, Section::Notifications).unwrap_err();
        assert!(matches!(err, CateringError::Unauthenticated));
    }

    #[test]
    fn test_chef_reaches_menus_only() {
        let chef = user(Role::Chef);
        assert!(AccessGate.authorize(Some(&chef), Section::Menus).is_ok());
        assert!(AccessGate.authorize(Some(&chef), Section::Notifications).is_ok());

        let err = AccessGate
            .authorize(Some(&chef), Section::Reports)
            .unwrap_err();
        match err {
            CateringError::Forbidden { role, redirect, .. } => {
                assert_eq!(role, Role::Chef);
                assert_eq!(redirect, Section::Menus);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_administrator_is_not_a_chef() {
        let admin = user(Role::Administrator);
        assert!(AccessGate.authorize(Some(&admin), Section::Menus).is_err());
        assert!(AccessGate.authorize(Some(&admin), Section::ClientReservations).is_ok());
    }

    #[test]
    fn test_every_role_can_open_its_default_section() {
        for role in Role::ALL {
            assert!(role.can_open(role.default_section()), "{role:?}");
        }
    }
}
