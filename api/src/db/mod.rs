// Database Module
// Connection pooling and repositories for teams and crypto hashes

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::{HashFilter, HashRepository, Repositories, TeamFilter, TeamRepository};
