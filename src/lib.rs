//! Library entrypoint for papermarket.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod error;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    /// Store handle, absent when MONGODB_URI / MONGODB_DB are not configured
    /// or the client could not be built. Store-backed endpoints answer with a
    /// server error in that case; the process keeps running.
    pub db: Option<mongodb::Database>,
    pub settings: config::Settings,
    pub order_locks: services::trading_service::OrderLocks,
}
