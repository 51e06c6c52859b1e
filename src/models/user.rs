use serde::{Deserialize, Serialize};

use crate::access::{Permission, Role};

/// A back-office account as seen by the rest of the crate. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Capabilities granted by the user's role.
    pub fn permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

/// Stored account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

/// Input for creating or editing an account. `id: None` creates.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef() -> User {
        User {
            id: "3".to_string(),
            name: "Lucia Torres".to_string(),
            email: "lucia@catering.com".to_string(),
            role: Role::Chef,
        }
    }

    #[test]
    fn test_has_role() {
        let user = chef();
        assert!(user.has_role(&[Role::Coordinator, Role::Chef]));
        assert!(!user.has_role(&[Role::Administrator]));
        assert!(!user.has_role(&[]));
    }

    #[test]
    fn test_permissions_follow_role() {
        let user = chef();
        assert!(user.can(Permission::MenusManage));
        assert!(!user.can(Permission::UsersManage));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = UserRecord {
            user: chef(),
            password: "chef123".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["email"], "lucia@catering.com");
        assert_eq!(value["role"], "chef");
        assert_eq!(value["password"], "chef123");
    }
}
