//! Entity module for database models

pub mod crypto_hashes;
pub mod prelude;
pub mod teams;
