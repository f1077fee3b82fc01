use serde::{Deserialize, Serialize};
use std::fmt;

/// Support desk role controlling which route subtree is reachable.
///
/// - `Admin`: back-office dashboards and the full ticket list.
/// - `Agent`: ticket queue and untreated tickets.
/// - `User`: a client, with their own tickets and ticket creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    User,
}

/// Every role, in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Agent, Role::User];

impl Role {
    /// Parse the role string sent by the backend. Unknown values are not a role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "agent" => Some(Role::Agent),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Lowercase wire / storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::User => "user",
        }
    }

    /// Route a freshly signed-in user of this role lands on.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Agent => "/agent/dashboard",
            Role::User => "/client/tickets",
        }
    }

    /// Human-readable label for headers and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Agent => "Agent",
            Role::User => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated identity held by the client between login and logout.
///
/// A `Session` value is always complete: the storage layer only produces one
/// when the token, both identity fields and a recognized role are all present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    /// Assemble a session from raw stored fields.
    ///
    /// Returns `None` for any partial state, including an empty token or a
    /// role string that is not one of the known roles.
    pub fn from_parts(
        token: Option<String>,
        user_id: Option<String>,
        username: Option<String>,
        role: Option<String>,
    ) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        let role = role.as_deref().and_then(Role::parse)?;
        Some(Self {
            token,
            user_id: user_id?,
            username: username?,
            role,
        })
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// One or two letter avatar fallback built from the username.
    pub fn initials(&self) -> String {
        let initials: String = self
            .username
            .split(|c: char| c.is_whitespace() || c == '.' || c == '@')
            .filter(|part| !part.is_empty())
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}
