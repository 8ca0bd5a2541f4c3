pub mod crud;
pub mod message;
pub mod page;
pub mod session;
