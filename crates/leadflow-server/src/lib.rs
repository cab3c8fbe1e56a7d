//! HTTP/JSON intake service for landing-page leads.
//!
//! Accepts form submissions, appends them to a flat-file store, lists the
//! stored collection, and receives booking webhooks from the scheduling
//! integration. This crate contains the service, API schema types, error
//! handling, configuration, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
