pub mod error;

// Session, role policy and configuration
pub mod access;
pub mod config;
pub mod session;

// Support desk domain
pub mod common;
pub mod requests;
pub mod ticket;

pub use access::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use requests::*;
pub use session::*;
pub use ticket::*;
