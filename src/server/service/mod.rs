//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Access Control**: Every operation consults `policy` with the caller's identity
//! - **Business Logic**: Ticket lifecycle rules and assignee validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod comment;
pub mod lifecycle;
pub mod statistics;
pub mod ticket;

#[cfg(test)]
mod test;
