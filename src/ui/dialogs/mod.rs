pub mod details;
pub mod ticket;
