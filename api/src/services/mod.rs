// Business logic service implementations

pub mod hash_service;
pub mod health;
pub mod summary_calculator;
pub mod summary_service;
pub mod team_service;
pub mod validation;
