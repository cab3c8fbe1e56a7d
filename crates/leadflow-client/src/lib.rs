//! Client-side submission handler for the landing-page lead form.
//!
//! [`SubmissionHandler::submit`] normalizes and validates raw form input,
//! appends the lead to a local cache, then tries the intake service. The
//! remote call is best effort: its failure never changes what the visitor
//! sees, but the returned [`Delivery`] records which path was taken.
//!
//! # Modules
//!
//! - [`config`]: endpoint, scheduling username and cache location
//! - [`cache`]: the local append-only backup copy
//! - [`remote`]: HTTP client for the intake service
//! - [`outcome`]: user-visible outcome and delivery path
//! - [`scheduling`]: the post-submission scheduling step
//! - [`export`]: CSV download of the local cache
//! - [`handler`]: the submission handler tying these together

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod handler;
pub mod outcome;
pub mod remote;
pub mod scheduling;

pub use cache::LocalCache;
pub use config::ClientConfig;
pub use error::ClientError;
pub use export::CsvExport;
pub use handler::SubmissionHandler;
pub use leadflow_core::RawLeadForm;
pub use outcome::{Delivery, FallbackReason, UserOutcome};
pub use remote::IntakeClient;
pub use scheduling::SchedulingStep;
