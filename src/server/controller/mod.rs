//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs into parameter models, call the
//! service layer and convert the returned domain models back into DTOs. Every handler
//! carries a `utoipa::path` annotation collected by the router.

pub mod auth;
pub mod comment;
pub mod statistics;
pub mod ticket;

#[cfg(test)]
mod test;
