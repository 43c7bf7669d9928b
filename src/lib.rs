//! Rideshare API gateway: origin admission and route dispatch.

pub mod admin;
pub mod config;
pub mod cors;
pub mod error;
pub mod middleware_impls;
pub mod routes;
pub mod server;
pub mod state;
