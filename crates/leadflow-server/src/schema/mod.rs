//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one group of
//! endpoints. Lead envelopes are shared with clients and live in
//! `leadflow-core`; they are re-exported from [`leads`].

pub mod common;
pub mod health;
pub mod leads;
pub mod webhook;
