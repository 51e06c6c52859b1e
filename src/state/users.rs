use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::Role;
use crate::error::{CateringError, Result};
use crate::models::{User, UserDraft, UserRecord};

/// All accounts known to the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Match email and password exactly.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        self.records
            .iter()
            .find(|r| r.user.email == email && r.password == password)
            .map(|r| r.user.clone())
            .ok_or_else(|| {
                warn!(email, "failed sign-in");
                CateringError::InvalidCredentials
            })
    }

    /// Create an account and return it. Emails are unique.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<User> {
        if self.records.iter().any(|r| r.user.email == email) {
            return Err(CateringError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.unwrap_or(Role::Client),
        };
        self.records.push(UserRecord {
            user: user.clone(),
            password: password.to_string(),
        });
        info!(email, role = %user.role, "registered account");
        Ok(user)
    }

    /// Edit an existing account, or create one when the draft has no id.
    ///
    /// New accounts get their email as initial password.
    pub fn upsert(&mut self, draft: UserDraft) -> Result<User> {
        match draft.id {
            Some(id) => {
                let record = self
                    .records
                    .iter_mut()
                    .find(|r| r.user.id == id)
                    .ok_or_else(|| CateringError::NotFound(format!("user {}", id)))?;
                record.user.name = draft.name;
                record.user.email = draft.email;
                record.user.role = draft.role;
                info!(id = %record.user.id, "updated account");
                Ok(record.user.clone())
            }
            None => {
                let user = User {
                    id: Uuid::new_v4().to_string(),
                    name: draft.name,
                    email: draft.email.clone(),
                    role: draft.role,
                };
                self.records.push(UserRecord {
                    user: user.clone(),
                    password: draft.email,
                });
                info!(id = %user.id, "created account");
                Ok(user)
            }
        }
    }

    /// Remove an account. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.user.id != id);
        let removed = self.records.len() < before;
        if removed {
            info!(id, "deleted account");
        }
        removed
    }

    /// Case-insensitive match on name or email. An empty term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .map(|r| &r.user)
            .filter(|u| {
                u.name.to_lowercase().contains(&term) || u.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.records.iter().map(|r| &r.user).find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The signed-in user, if any. Lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn sign_in(&mut self, directory: &UserDirectory, email: &str, password: &str) -> Result<&User> {
        let user = directory.login(email, password)?;
        info!(email, role = %user.role, "signed in");
        Ok(&*self.user.insert(user))
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Delete an account; signs out if it was the current user.
    pub fn delete_user(&mut self, directory: &mut UserDirectory, id: &str) -> bool {
        let removed = directory.delete(id);
        if self.user.as_ref().is_some_and(|u| u.id == id) {
            self.sign_out();
        }
        removed
    }
}
