//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary
//! (`from_entity`), services operate on them, and controllers convert them into
//! DTOs (`into_dto`). Parameter types are built from request DTOs and carry
//! already-validated values.

pub mod auth;
pub mod comment;
pub mod statistics;
pub mod ticket;
pub mod user;
