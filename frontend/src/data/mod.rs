pub mod repository;
pub mod seed;
pub mod types;

pub use repository::MockRepository;
pub use types::*;
