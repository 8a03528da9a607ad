mod comment;
mod statistics;
mod ticket;
mod user;
