//! Library entrypoint for KeyCheck.
//!
//! This file exists mainly to make endpoint tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod models;
pub mod validation;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: services::store::PreorderStore,
    pub settings: config::Settings,
}
