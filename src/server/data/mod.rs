//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for users,
//! tickets, comments and ticket statistics. Repositories use SeaORM entity models
//! internally and return domain models to maintain separation between the data layer
//! and business logic layer. Multi-statement writes open their own transaction.

pub mod comment;
pub mod statistics;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
