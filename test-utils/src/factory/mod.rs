//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and `create_*` convenience functions for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let technician = factory::user::create_technician(&db).await?;
//! let ticket = factory::ticket::create_ticket(&db, owner.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let ticket = factory::ticket::TicketFactory::new(&db, owner.id)
//!     .estado("in-progress")
//!     .asignado_a(Some(technician.id))
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod helpers;
pub mod ticket;
pub mod user;

pub use comment::create_comment;
pub use ticket::create_ticket;
pub use user::{create_technician, create_user};
