//! HTTP front end: configuration, server wiring, HTML routes.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
