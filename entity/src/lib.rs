//! SeaORM entity models for the helpdesk database.

pub mod prelude;

pub mod comment;
pub mod ticket;
pub mod user;
