pub mod repository;
pub mod types;

pub use repository::GitOps;
pub use types::*;
