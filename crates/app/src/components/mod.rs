pub mod status_badge;
pub mod ticket_card;

pub use status_badge::StatusBadge;
pub use ticket_card::TicketCard;
