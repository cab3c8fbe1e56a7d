//! HTTP handler modules for the intake API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock where storage is involved, delegate to
//! [`LeadService`](crate::service::LeadService), and return JSON responses.
//! No business logic lives in handlers.

pub mod health;
pub mod leads;
pub mod webhook;
