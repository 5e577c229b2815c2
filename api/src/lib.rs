// Hashlots API library: team hash records and lot summaries over HTTP

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::AppState;
pub use routes::create_router;
