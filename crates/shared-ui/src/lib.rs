//! Presentational components shared by every screen of the support desk.

pub mod components;

pub use components::*;
