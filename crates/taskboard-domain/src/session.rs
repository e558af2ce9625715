//! Mock authentication.
//!
//! Stands in for the dashboard's login screen. There is no backend: the
//! session manager knows a fixed set of accounts and keeps at most one user
//! signed in. The board itself never checks the session; presentation code
//! calls `require_admin` before exposing add, edit, or delete.

use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: User,
}

#[derive(Debug, Clone)]
pub struct SessionManager {
    accounts: Vec<Account>,
    current: Option<User>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_mock_accounts()
    }
}

impl SessionManager {
    pub fn empty() -> Self {
        Self {
            accounts: Vec::new(),
            current: None,
        }
    }

    /// The admin and member demo accounts, both with password `password`.
    pub fn with_mock_accounts() -> Self {
        Self::empty()
            .with_account(
                User {
                    id: "1".to_string(),
                    name: "Admin User".to_string(),
                    email: "admin@example.com".to_string(),
                    role: Role::Admin,
                    avatar: Some(
                        "https://ui-avatars.com/api/?name=Admin+User&background=random"
                            .to_string(),
                    ),
                },
                "password",
            )
            .with_account(
                User {
                    id: "2".to_string(),
                    name: "Team Member".to_string(),
                    email: "user@example.com".to_string(),
                    role: Role::Member,
                    avatar: Some(
                        "https://ui-avatars.com/api/?name=Team+Member&background=random"
                            .to_string(),
                    ),
                },
                "password",
            )
    }

    pub fn with_account(mut self, user: User, password: impl Into<String>) -> Self {
        self.accounts.push(Account {
            password: password.into(),
            user,
        });
        self
    }

    /// Signs in, replacing any current user. A failed attempt leaves the session as it was.
    pub fn login(&mut self, email: &str, password: &str) -> TaskboardResult<&User> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
            .ok_or_else(|| {
                tracing::warn!(email, "Login rejected");
                TaskboardError::InvalidCredentials
            })?;
        tracing::info!(user = %account.user.name, "Logged in");
        Ok(self.current.insert(account.user.clone()))
    }

    pub fn logout(&mut self) -> Option<User> {
        self.current.take()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|user| user.role == Role::Admin)
    }

    /// The signed-in user, or `Unauthorized` naming `action`.
    pub fn require_user(&self, action: &str) -> TaskboardResult<&User> {
        self.current.as_ref().ok_or_else(|| {
            TaskboardError::Unauthorized(format!("{} requires signing in", action))
        })
    }

    pub fn require_admin(&self, action: &str) -> TaskboardResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(TaskboardError::Unauthorized(format!(
                "{} requires an admin session",
                action
            )))
        }
    }
}
