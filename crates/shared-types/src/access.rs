use crate::session::{Role, Session};

/// Path of the sign-in view.
pub const LOGIN_PATH: &str = "/login";
/// Path of the "access denied" view.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
/// Landing route when no role is recognized.
pub const DEFAULT_LANDING_PATH: &str = "/client/tickets";

/// One row of the route policy: a subtree root and the role that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub role: Role,
    pub root: &'static str,
}

/// The route policy. Each role owns exactly one subtree; paths outside every
/// subtree are unguarded.
pub const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule {
        role: Role::Admin,
        root: "/admin",
    },
    RouteRule {
        role: Role::Agent,
        root: "/agent",
    },
    RouteRule {
        role: Role::User,
        root: "/client",
    },
];

/// Result of evaluating the guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl GuardOutcome {
    /// Where to send the user, or `None` when the subtree may render.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::RedirectToLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }
}

/// Decide whether `session` may enter a subtree requiring one of `required`.
pub fn evaluate(session: Option<&Session>, required: &[Role]) -> GuardOutcome {
    match session {
        None => GuardOutcome::RedirectToLogin,
        Some(s) if required.contains(&s.role) => GuardOutcome::Allow,
        Some(_) => GuardOutcome::RedirectToUnauthorized,
    }
}

/// True if `path` is `root` itself or lies beneath it (`/admin` matches
/// `/admin/users` but not `/administrator`).
fn is_under(path: &str, root: &str) -> bool {
    match path.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Roles allowed to enter `path`, or `None` when the path is unguarded.
pub fn required_roles(path: &str) -> Option<Vec<Role>> {
    let roles: Vec<Role> = ROUTE_TABLE
        .iter()
        .filter(|rule| is_under(path, rule.root))
        .map(|rule| rule.role)
        .collect();
    if roles.is_empty() {
        None
    } else {
        Some(roles)
    }
}

/// Evaluate the guard for a concrete path using the route table.
pub fn authorize_path(session: Option<&Session>, path: &str) -> GuardOutcome {
    match required_roles(path) {
        Some(roles) => evaluate(session, &roles),
        None => GuardOutcome::Allow,
    }
}

/// Target for an unmatched path: the role's landing route, or the client
/// ticket list when no role is known.
pub fn landing_path(session: Option<&Session>) -> &'static str {
    session
        .map(|s| s.role.landing_path())
        .unwrap_or(DEFAULT_LANDING_PATH)
}
