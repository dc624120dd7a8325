pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod production;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
