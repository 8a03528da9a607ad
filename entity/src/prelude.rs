pub use super::comment::Entity as Comment;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
