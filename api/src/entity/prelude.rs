//! Prelude module for convenient imports

pub use super::crypto_hashes::Entity as CryptoHashes;
pub use super::teams::Entity as Teams;
