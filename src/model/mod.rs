//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod comment;
pub mod statistics;
pub mod ticket;
pub mod user;
