use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical ticket status.
///
/// The live API speaks a French vocabulary (`en_traitement`, `résolu`, ...)
/// while older screens used English keys (`in_progress`, `closed`, ...).
/// Both are accepted through [`STATUS_VOCABULARY`]; the API spelling is the
/// one written back. Unrecognized values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    Open,
    InProgress,
    Escalated,
    Resolved,
    Closed,
    Urgent,
    Other(String),
}

/// Every wire spelling and the status it maps to. API values come first for
/// each status; `as_wire` returns the first match.
pub static STATUS_VOCABULARY: &[(&str, TicketStatus)] = &[
    ("ouvert", TicketStatus::Open),
    ("open", TicketStatus::Open),
    ("en_traitement", TicketStatus::InProgress),
    ("in_progress", TicketStatus::InProgress),
    ("escaladé", TicketStatus::Escalated),
    ("escalade", TicketStatus::Escalated),
    ("résolu", TicketStatus::Resolved),
    ("resolu", TicketStatus::Resolved),
    ("resolved", TicketStatus::Resolved),
    ("fermé", TicketStatus::Closed),
    ("ferme", TicketStatus::Closed),
    ("closed", TicketStatus::Closed),
    ("urgent", TicketStatus::Urgent),
];

/// Known statuses in filter/display order.
pub static KNOWN_STATUSES: &[TicketStatus] = &[
    TicketStatus::Open,
    TicketStatus::InProgress,
    TicketStatus::Escalated,
    TicketStatus::Resolved,
    TicketStatus::Closed,
    TicketStatus::Urgent,
];

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Warning,
    Success,
    Muted,
    Danger,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Info => "info",
            StatusTone::Warning => "warning",
            StatusTone::Success => "success",
            StatusTone::Muted => "muted",
            StatusTone::Danger => "danger",
        }
    }
}

impl TicketStatus {
    /// Map any known spelling (either vocabulary, any case) to a status.
    pub fn parse(s: &str) -> Self {
        let key = s.trim().to_lowercase();
        STATUS_VOCABULARY
            .iter()
            .find(|(wire, _)| *wire == key)
            .map(|(_, status)| status.clone())
            .unwrap_or_else(|| TicketStatus::Other(s.to_string()))
    }

    /// API spelling.
    pub fn as_wire(&self) -> &str {
        match self {
            TicketStatus::Other(raw) => raw,
            known => STATUS_VOCABULARY
                .iter()
                .find(|(_, status)| status == known)
                .map(|(wire, _)| *wire)
                .unwrap_or(""),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TicketStatus::Open => "Ouvert",
            TicketStatus::InProgress => "En traitement",
            TicketStatus::Escalated => "Escaladé",
            TicketStatus::Resolved => "Résolu",
            TicketStatus::Closed => "Fermé",
            TicketStatus::Urgent => "Urgent",
            TicketStatus::Other(raw) => raw,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            TicketStatus::Open => StatusTone::Warning,
            TicketStatus::InProgress | TicketStatus::Escalated => StatusTone::Info,
            TicketStatus::Resolved => StatusTone::Success,
            TicketStatus::Urgent => StatusTone::Danger,
            TicketStatus::Closed | TicketStatus::Other(_) => StatusTone::Muted,
        }
    }

    /// Not yet picked up by an agent.
    pub fn is_untreated(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::Urgent)
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        TicketStatus::parse(&s)
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ticket row as returned by `GET /api/v1/tickets/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketSummary {
    pub id: i64,
    pub sujet: String,
    #[serde(default)]
    pub description: String,
    pub user_id: i64,
    #[serde(default, alias = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

impl TicketSummary {
    /// Status with a missing value read as a freshly opened ticket.
    pub fn effective_status(&self) -> TicketStatus {
        self.status.clone().unwrap_or(TicketStatus::Open)
    }
}

/// Full ticket as returned by `GET /api/v1/tickets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub sujet: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub date_probleme: String,
    pub user_id: i64,
    #[serde(alias = "status")]
    pub statut: TicketStatus,
}

impl From<Ticket> for TicketSummary {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            sujet: t.sujet,
            description: t.description,
            user_id: t.user_id,
            status: Some(t.statut),
        }
    }
}

/// Body of `POST /api/v1/tickets/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTicket {
    pub sujet: String,
    pub description: String,
    pub date_probleme: String,
    pub user_id: i64,
}

/// Client-side ticket list filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub query: String,
    pub status: Option<TicketStatus>,
}

impl TicketFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_none()
    }

    pub fn matches(&self, ticket: &TicketSummary) -> bool {
        if let Some(status) = &self.status {
            if ticket.effective_status() != *status {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        ticket.sujet.to_lowercase().contains(&query)
            || ticket.description.to_lowercase().contains(&query)
    }

    pub fn apply(&self, tickets: &[TicketSummary]) -> Vec<TicketSummary> {
        tickets
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

/// Per-status counts for dashboards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub escalated: usize,
    pub resolved: usize,
    pub closed: usize,
    pub urgent: usize,
    pub other: usize,
}

impl TicketStats {
    pub fn from_tickets(tickets: &[TicketSummary]) -> Self {
        let mut stats = Self {
            total: tickets.len(),
            ..Self::default()
        };
        for ticket in tickets {
            match ticket.effective_status() {
                TicketStatus::Open => stats.open += 1,
                TicketStatus::InProgress => stats.in_progress += 1,
                TicketStatus::Escalated => stats.escalated += 1,
                TicketStatus::Resolved => stats.resolved += 1,
                TicketStatus::Closed => stats.closed += 1,
                TicketStatus::Urgent => stats.urgent += 1,
                TicketStatus::Other(_) => stats.other += 1,
            }
        }
        stats
    }

    /// Tickets still waiting for an agent.
    pub fn untreated(&self) -> usize {
        self.open + self.urgent
    }

    /// Share of tickets resolved or closed, in whole percent.
    pub fn resolution_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (((self.resolved + self.closed) * 100) / self.total) as u32
    }
}
